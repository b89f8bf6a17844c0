//! The logging collaborator every statistics writer reports through.
//!
//! The broker runtime owns actual log emission (destination, catalog lookup,
//! persistence). Writers only hand it a [`LogEvent`]: a severity, a source
//! tag, a message catalog key with a message number, the human-readable
//! template text and its ordered inserts. Delivery never fails from the
//! writer's perspective.

mod log_event;
mod log_severity;
mod system_logger;

pub use log_event::LogEvent;
pub use log_severity::LogSeverity;
pub use system_logger::SystemLogger;

/// Catalog key the host resolves message numbers against.
pub const MESSAGE_CATALOG: &str = "BIPmsgs";

/// Message number logged when creating a statistics writer fails.
pub const MSG_WRITER_CREATE_FAILED: u32 = 2113;

/// Message number logged when a statistics record is written.
pub const MSG_RECORD_WRITTEN: u32 = 2118;

/// Trait for the host's logging collaborator.
///
/// Implementations own their failure handling; `log` deliberately returns
/// nothing so a writer can treat every delivery as fire-and-forget.
#[cfg_attr(test, mockall::automock)]
pub trait BrokerLogger: Send + Sync {
    fn log(&self, event: &LogEvent);
}
