use crate::plugin::{AttributeSet, StatsRecord};

/// Trait that statistics writer plugins must implement.
///
/// A writer owns an [`AttributeSet`] for its configurable properties and
/// reacts to each record the broker delivers. The buffer mechanics of the
/// host boundary are handled by [`StatsWriterWrapper`]; implementations only
/// deal in ordinary strings.
///
/// # Example
///
/// ```
/// use flowstats_rust::plugin::{AttributeSet, StatsRecord, StatsWriter};
///
/// struct ConsoleStatsWriter {
///     attributes: AttributeSet,
/// }
///
/// impl StatsWriter for ConsoleStatsWriter {
///     fn resource_name(&self) -> String {
///         "ConsoleStatsWriter".to_string()
///     }
///
///     fn format_name(&self) -> String {
///         "console".to_string()
///     }
///
///     fn attributes(&self) -> &AttributeSet {
///         &self.attributes
///     }
///
///     fn write(&self, record: &StatsRecord) {
///         println!("{}", record.message_flow.flow);
///     }
/// }
/// ```
///
/// [`StatsWriterWrapper`]: crate::plugin::StatsWriterWrapper
pub trait StatsWriter: Send + Sync + 'static {
    /// Returns the registration name of the writer.
    fn resource_name(&self) -> String;

    /// Returns the name of the statistics format the writer emits.
    fn format_name(&self) -> String;

    /// The writer's configurable attributes. Enumeration, reads and writes
    /// issued by the host all resolve against this set.
    fn attributes(&self) -> &AttributeSet;

    /// Handle one statistics record.
    ///
    /// Called once per message flow each time the host flushes statistics.
    /// The record must not be retained past the call.
    fn write(&self, record: &StatsRecord);

    /// Called when the host is unloading the writer.
    fn shutdown(&self) {}
}
