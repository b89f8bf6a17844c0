use crate::plugin::logger::{LogSeverity, MESSAGE_CATALOG};
use std::fmt;

/// One message handed to the host's logging collaborator.
///
/// Mirrors what the host catalog machinery expects: a severity, a source tag
/// identifying where the event was raised, the catalog key and message number
/// the host resolves the final text against, the human-readable template, and
/// the ordered insert values substituted into the catalog message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub severity: LogSeverity,
    pub source: String,
    pub catalog: String,
    pub number: u32,
    pub text: String,
    pub inserts: Vec<String>,
}

impl LogEvent {
    /// Create an event against the default message catalog.
    pub fn new(severity: LogSeverity, source: &str, number: u32, text: &str) -> Self {
        Self {
            severity,
            source: source.to_string(),
            catalog: MESSAGE_CATALOG.to_string(),
            number,
            text: text.to_string(),
            inserts: Vec::new(),
        }
    }

    pub fn with_inserts(mut self, inserts: Vec<String>) -> Self {
        self.inserts = inserts;
        self
    }

    /// Render the event the way a catalog-less destination would show it.
    pub fn render(&self) -> String {
        if self.inserts.is_empty() {
            format!("{}{}: {}", self.catalog, self.number, self.text)
        } else {
            format!(
                "{}{}: {} [{}]",
                self.catalog,
                self.number,
                self.text,
                self.inserts.join(", ")
            )
        }
    }
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
