use crate::plugin::{AttributeError, BrokerPlugin, StatsRecord, StatsWriter};
use crate::util;
use std::sync::Arc;

/// Wrapper that adapts a [`StatsWriter`] to the [`BrokerPlugin`] interface.
///
/// The wrapper owns the buffer mechanics of the host boundary: attribute
/// names and values are resolved through the writer's `AttributeSet` and then
/// copied into the caller-supplied UTF-16 buffer, reporting the required
/// capacity instead of writing when the buffer is too small.
///
/// You typically don't interact with this directly beyond constructing it in
/// a registration factory.
pub struct StatsWriterWrapper<W: StatsWriter> {
    writer: Arc<W>,
}

impl<W: StatsWriter> StatsWriterWrapper<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Arc::new(writer),
        }
    }
}

impl<W: StatsWriter> Clone for StatsWriterWrapper<W> {
    fn clone(&self) -> Self {
        Self {
            writer: Arc::clone(&self.writer),
        }
    }
}

impl<W: StatsWriter> BrokerPlugin for StatsWriterWrapper<W> {
    fn resource_name(&self) -> String {
        self.writer.resource_name()
    }

    fn format_name(&self) -> String {
        self.writer.format_name()
    }

    fn attribute_name(&self, index: usize, buffer: &mut [u16]) -> Result<usize, AttributeError> {
        let name = self.writer.attributes().name(index)?;
        util::copy_utf16(name, buffer)
    }

    fn attribute(&self, name: &str, buffer: &mut [u16]) -> Result<usize, AttributeError> {
        let value = self.writer.attributes().get(name)?;
        util::copy_utf16(&value, buffer)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), AttributeError> {
        self.writer.attributes().set(name, value)
    }

    fn write(&self, record: &StatsRecord) {
        self.writer.write(record);
    }

    fn shutdown(&self) {
        self.writer.shutdown();
    }
}
