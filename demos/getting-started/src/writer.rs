use flowstats_rust::plugin::{
    AttributeSet, BrokerLogger, LogEvent, LogSeverity, StatsRecord, StatsWriter,
    MSG_RECORD_WRITTEN,
};
use std::sync::Arc;

/// The name of the statistics writer resource. This is the name that
/// administrative tooling targets to change or report on the writer's
/// properties.
pub const RESOURCE_NAME: &str = "GettingStartedStatsWriter";

/// The name of the format written by this statistics writer. This is the name
/// used to enable this writer for a specific message flow or set of flows.
pub const FORMAT_NAME: &str = "gettingstarted";

const PROPERTY1_NAME: &str = "property1";
const PROPERTY2_NAME: &str = "property2";

/// Minimal statistics writer: two text properties and one informational log
/// line per record.
pub struct GettingStartedStatsWriter {
    attributes: AttributeSet,
    logger: Arc<dyn BrokerLogger>,
}

impl GettingStartedStatsWriter {
    pub fn new(logger: Arc<dyn BrokerLogger>) -> Result<Self, String> {
        Ok(Self {
            attributes: AttributeSet::new([PROPERTY1_NAME, PROPERTY2_NAME]),
            logger,
        })
    }
}

impl StatsWriter for GettingStartedStatsWriter {
    fn resource_name(&self) -> String {
        RESOURCE_NAME.to_string()
    }

    fn format_name(&self) -> String {
        FORMAT_NAME.to_string()
    }

    fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    /// Called once per message flow with statistics enabled each time the
    /// host flushes a collection interval.
    fn write(&self, record: &StatsRecord) {
        let text = "Called to write a statistics record";
        let property1 = self.attributes.get(PROPERTY1_NAME).unwrap_or_default();
        let property2 = self.attributes.get(PROPERTY2_NAME).unwrap_or_default();

        let event = LogEvent::new(LogSeverity::Info, module_path!(), MSG_RECORD_WRITTEN, text)
            .with_inserts(vec![
                text.to_string(),
                RESOURCE_NAME.to_string(),
                FORMAT_NAME.to_string(),
                record.message_flow.application.clone(),
                record.message_flow.library.clone(),
                record.message_flow.flow.clone(),
                property1,
                property2,
            ]);
        self.logger.log(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowstats_rust::plugin::{AttributeError, MessageFlowIdentity};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<LogEvent>>,
    }

    impl BrokerLogger for RecordingLogger {
        fn log(&self, event: &LogEvent) {
            if let Ok(mut events) = self.events.lock() {
                events.push(event.clone());
            }
        }
    }

    fn writer_with_logger() -> (GettingStartedStatsWriter, Arc<RecordingLogger>) {
        let logger = Arc::new(RecordingLogger::default());
        let writer = GettingStartedStatsWriter::new(logger.clone()).unwrap();
        (writer, logger)
    }

    #[test]
    fn test_declares_two_properties_in_order() {
        let (writer, _logger) = writer_with_logger();
        assert_eq!(writer.attributes().len(), 2);
        assert_eq!(writer.attributes().name(0), Ok("property1"));
        assert_eq!(writer.attributes().name(1), Ok("property2"));
        assert_eq!(writer.attributes().name(2), Err(AttributeError::Unknown));
    }

    #[test]
    fn test_identity_constants() {
        let (writer, _logger) = writer_with_logger();
        assert_eq!(writer.resource_name(), "GettingStartedStatsWriter");
        assert_eq!(writer.format_name(), "gettingstarted");
    }

    /// The concrete end-to-end scenario: set property1="x", property2="y",
    /// write a record for ("App", "Lib", "Flow"), and the logging
    /// collaborator receives exactly one informational message embedding
    /// "App", "Lib", "Flow", "x" and "y".
    #[test]
    fn test_write_logs_one_informational_event() {
        let (writer, logger) = writer_with_logger();
        writer.attributes().set("property1", "x").unwrap();
        writer.attributes().set("property2", "y").unwrap();

        let record = StatsRecord::snapshot(MessageFlowIdentity::new("App", "Lib", "Flow"));
        writer.write(&record);

        let events = logger.events.lock().unwrap();
        assert_eq!(events.len(), 1);

        let event = &events[0];
        assert_eq!(event.severity, LogSeverity::Info);
        assert_eq!(event.number, MSG_RECORD_WRITTEN);
        assert_eq!(
            event.inserts,
            vec![
                "Called to write a statistics record".to_string(),
                "GettingStartedStatsWriter".to_string(),
                "gettingstarted".to_string(),
                "App".to_string(),
                "Lib".to_string(),
                "Flow".to_string(),
                "x".to_string(),
                "y".to_string(),
            ]
        );

        // Property reads after the write still return the configured values.
        assert_eq!(writer.attributes().get("property1").ok().as_deref(), Some("x"));
    }

    #[test]
    fn test_unset_properties_are_logged_as_empty_inserts() {
        let (writer, logger) = writer_with_logger();
        let record = StatsRecord::archive(MessageFlowIdentity::new("A", "L", "F"));
        writer.write(&record);

        let events = logger.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].inserts.len(), 8);
        assert_eq!(events[0].inserts[6], "");
        assert_eq!(events[0].inserts[7], "");
    }
}
