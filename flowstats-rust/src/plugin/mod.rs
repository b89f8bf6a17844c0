mod _enums;
mod _traits;
mod attributes;
mod logger;
mod record;
mod writer;

// Re-exporting all public structures
pub use _enums::attribute::AttributeError;

pub use _traits::broker_plugin::BrokerPlugin;
pub use _traits::stats_writer::StatsWriter;

pub use attributes::AttributeSet;

pub use logger::{
    BrokerLogger, LogEvent, LogSeverity, SystemLogger, MESSAGE_CATALOG, MSG_RECORD_WRITTEN,
    MSG_WRITER_CREATE_FAILED,
};
#[cfg(test)]
pub(crate) use logger::MockBrokerLogger;

pub use record::{CollectionKind, MessageFlowIdentity, StatsRecord};

pub use writer::StatsWriterWrapper;
