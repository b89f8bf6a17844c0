use chrono::Local;
use flowstats_rust::plugin::{AttributeSet, StatsRecord, StatsWriter};
use serde_json::json;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

pub const RESOURCE_NAME: &str = "FileStatsWriter";
pub const FORMAT_NAME: &str = "jsonlines";

const LABEL_NAME: &str = "label";

/// Statistics writer that appends each record as one JSON line.
///
/// The `label` attribute is copied into every line, so records from multiple
/// runs can be told apart after the fact.
pub struct FileStatsWriter {
    attributes: AttributeSet,
    output: Mutex<File>,
}

impl FileStatsWriter {
    pub fn new(path: PathBuf) -> Result<Self, String> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| format!("Failed to open {}: {e}", path.display()))?;

        Ok(Self {
            attributes: AttributeSet::new([LABEL_NAME]),
            output: Mutex::new(file),
        })
    }
}

impl StatsWriter for FileStatsWriter {
    fn resource_name(&self) -> String {
        RESOURCE_NAME.to_string()
    }

    fn format_name(&self) -> String {
        FORMAT_NAME.to_string()
    }

    fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    fn write(&self, record: &StatsRecord) {
        let label = self.attributes.get(LABEL_NAME).unwrap_or_default();
        let line = json!({
            "timestamp": Local::now().format("%Y-%m-%dT%H:%M:%S%.3f").to_string(),
            "application": record.message_flow.application,
            "library": record.message_flow.library,
            "flow": record.message_flow.flow,
            "collection": record.collection.to_string(),
            "label": label,
        });

        // The host treats writes as infallible; an I/O failure only costs
        // this record.
        let Ok(mut file) = self.output.lock() else {
            log::error!("stats file lock poisoned, dropping record");
            return;
        };
        if let Err(e) = writeln!(file, "{line}") {
            log::error!("failed to append statistics record: {e}");
        }
        if let Err(e) = file.flush() {
            log::error!("failed to flush statistics file: {e}");
        }
    }

    fn shutdown(&self) {
        if let Ok(mut file) = self.output.lock() {
            let _ = file.flush();
        }
    }
}
