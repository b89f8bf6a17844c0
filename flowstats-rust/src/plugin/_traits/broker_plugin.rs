use crate::plugin::{AttributeError, StatsRecord};

/// The surface the broker runtime invokes on a registered statistics writer.
///
/// This trait replaces the C function-pointer table the runtime would
/// otherwise hand callbacks through: the host holds an `Arc<dyn BrokerPlugin>`
/// and drives every call. Read operations reproduce the caller-allocates
/// buffer contract of that boundary: the destination is a UTF-16 buffer, a
/// too-small buffer is reported together with the required capacity and left
/// unwritten, and success returns the number of code units copied.
///
/// You typically don't implement this directly - implement [`StatsWriter`]
/// and register it through [`StatsWriterWrapper`].
///
/// [`StatsWriter`]: crate::plugin::StatsWriter
/// [`StatsWriterWrapper`]: crate::plugin::StatsWriterWrapper
pub trait BrokerPlugin: Send + Sync {
    /// Name under which the writer is registered and addressed by
    /// administrative tooling.
    fn resource_name(&self) -> String;

    /// Name of the statistics format this writer emits, used by tooling to
    /// route flow statistics to it.
    fn format_name(&self) -> String;

    /// Copy the name of the attribute at `index` into `buffer`.
    ///
    /// Index 0 is the first declared attribute; enumeration order is stable.
    fn attribute_name(&self, index: usize, buffer: &mut [u16]) -> Result<usize, AttributeError>;

    /// Copy the current value of the named attribute into `buffer`.
    fn attribute(&self, name: &str, buffer: &mut [u16]) -> Result<usize, AttributeError>;

    /// Replace the value of the named attribute. Any text is accepted,
    /// including empty.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), AttributeError>;

    /// Handle one statistics record. The record is owned by the host and must
    /// not be retained past this call; the operation never fails from the
    /// host's perspective.
    fn write(&self, record: &StatsRecord);

    /// Notify the writer that the host is unloading it.
    fn shutdown(&self) {}
}
