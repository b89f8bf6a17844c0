use strum_macros::{Display, EnumString};

/// The flow-identifying triple carried by every statistics record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageFlowIdentity {
    pub application: String,
    pub library: String,
    pub flow: String,
}

impl MessageFlowIdentity {
    pub fn new(
        application: impl Into<String>,
        library: impl Into<String>,
        flow: impl Into<String>,
    ) -> Self {
        Self {
            application: application.into(),
            library: library.into(),
            flow: flow.into(),
        }
    }
}

/// Which collection the host flushed the record from.
///
/// Snapshot records are produced on the short snapshot interval, archive
/// records on the long-running archive interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum CollectionKind {
    Snapshot,
    Archive,
}

/// One statistics record, describing a single message flow execution window.
///
/// Records are owned and populated by the host; writers receive them by
/// reference for the duration of one `write` call and must not retain them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsRecord {
    pub message_flow: MessageFlowIdentity,
    pub collection: CollectionKind,
}

impl StatsRecord {
    pub fn new(message_flow: MessageFlowIdentity, collection: CollectionKind) -> Self {
        Self {
            message_flow,
            collection,
        }
    }

    pub fn snapshot(message_flow: MessageFlowIdentity) -> Self {
        Self::new(message_flow, CollectionKind::Snapshot)
    }

    pub fn archive(message_flow: MessageFlowIdentity) -> Self {
        Self::new(message_flow, CollectionKind::Archive)
    }
}
