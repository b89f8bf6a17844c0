#![forbid(unsafe_code)]

// The host-facing dispatch surface lives in `host`; everything a plugin
// author implements or constructs lives in `plugin`.
pub mod host;
pub mod plugin;
mod util;

pub use crate::host::{RegistryError, WriterRegistry};

///
/// Expose all structures required in virtually any statistics writer plugin
///
/// ```
/// use flowstats_rust::prelude::*;
/// ```
pub mod prelude {
    pub use crate::host::{RegistryError, WriterRegistry};
    pub use crate::plugin::{
        AttributeError, AttributeSet, BrokerLogger, BrokerPlugin, CollectionKind, LogEvent,
        LogSeverity, MessageFlowIdentity, StatsRecord, StatsWriter, StatsWriterWrapper,
        SystemLogger,
    };
}
