use crate::plugin::logger::{BrokerLogger, LogEvent};

/// Logging collaborator that forwards events to the `log` facade.
///
/// Stands in for the broker's own catalog-backed emitter when a writer runs
/// outside the real runtime: severities map onto `log::Level`, the event's
/// source tag becomes the log target, and the rendered text carries the
/// catalog key, message number and inserts.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLogger;

impl SystemLogger {
    pub fn new() -> Self {
        Self
    }
}

impl BrokerLogger for SystemLogger {
    fn log(&self, event: &LogEvent) {
        let level: log::Level = event.severity.into();
        log::log!(target: event.source.as_str(), level, "{}", event.render());
    }
}
