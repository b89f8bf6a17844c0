/// Writer registry and dispatch for the broker host boundary.
use crate::plugin::{
    AttributeError, BrokerLogger, BrokerPlugin, LogEvent, LogSeverity, StatsRecord,
    MSG_WRITER_CREATE_FAILED,
};
use clap::crate_name;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Errors surfaced to the host when dispatching a call to a writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No writer is registered under the given resource name.
    UnknownWriter(String),
    /// The addressed writer rejected the attribute operation.
    Attribute(AttributeError),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::UnknownWriter(resource) => {
                write!(f, "no statistics writer registered as '{resource}'")
            }
            RegistryError::Attribute(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegistryError::UnknownWriter(_) => None,
            RegistryError::Attribute(e) => Some(e),
        }
    }
}

impl From<AttributeError> for RegistryError {
    fn from(value: AttributeError) -> Self {
        RegistryError::Attribute(value)
    }
}

/// Dispatch table of registered statistics writers, keyed by resource name.
///
/// Plays the role of the broker runtime at the plugin boundary: writers are
/// created exactly once through [`register`](WriterRegistry::register) and
/// every subsequent host call is routed by resource name. A factory failure
/// is absorbed here - it is logged once at error severity and reported as
/// `None`, never propagated.
pub struct WriterRegistry {
    name: String,
    writers: HashMap<String, Arc<dyn BrokerPlugin>>,
    logger: Arc<dyn BrokerLogger>,
}

impl WriterRegistry {
    /// Create a registry.
    ///
    /// # Arguments
    /// * `name` - Optional registry identity used in trace output (defaults
    ///   to the crate name)
    /// * `logger` - The logging collaborator handed failure events
    pub fn new(name: Option<&str>, logger: Arc<dyn BrokerLogger>) -> Self {
        let name = name.unwrap_or(crate_name!());
        Self {
            name: name.to_string(),
            writers: HashMap::new(),
            logger,
        }
    }

    /// Create a writer through `factory` and register it under its resource
    /// name.
    ///
    /// Returns the resource name on success. A factory error or a duplicate
    /// resource name yields `None` after one error-severity log event; the
    /// host never sees the underlying failure.
    pub fn register<P, F>(&mut self, factory: F) -> Option<String>
    where
        P: BrokerPlugin + 'static,
        F: FnOnce() -> Result<P, String>,
    {
        let plugin = match factory() {
            Ok(plugin) => plugin,
            Err(reason) => {
                self.log_create_failure(&reason);
                return None;
            }
        };

        let resource = plugin.resource_name();
        if self.writers.contains_key(&resource) {
            self.log_create_failure(&format!(
                "resource name '{resource}' is already registered"
            ));
            return None;
        }

        log::debug!(
            "registry {}: registered writer '{}' (format '{}')",
            self.name,
            resource,
            plugin.format_name()
        );
        self.writers.insert(resource.clone(), Arc::new(plugin));
        Some(resource)
    }

    /// Look up a registered writer by resource name.
    pub fn writer(&self, resource: &str) -> Option<&Arc<dyn BrokerPlugin>> {
        self.writers.get(resource)
    }

    pub fn len(&self) -> usize {
        self.writers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writers.is_empty()
    }

    /// Copy the name of the attribute at `index` of the addressed writer.
    pub fn attribute_name(
        &self,
        resource: &str,
        index: usize,
        buffer: &mut [u16],
    ) -> Result<usize, RegistryError> {
        log::trace!("registry {}: attribute_name {resource}[{index}]", self.name);
        let writer = self.lookup(resource)?;
        writer.attribute_name(index, buffer).map_err(Into::into)
    }

    /// Copy the current value of the named attribute of the addressed writer.
    pub fn attribute(
        &self,
        resource: &str,
        name: &str,
        buffer: &mut [u16],
    ) -> Result<usize, RegistryError> {
        log::trace!("registry {}: attribute {resource}.{name}", self.name);
        let writer = self.lookup(resource)?;
        writer.attribute(name, buffer).map_err(Into::into)
    }

    /// Replace the value of the named attribute of the addressed writer.
    pub fn set_attribute(
        &self,
        resource: &str,
        name: &str,
        value: &str,
    ) -> Result<(), RegistryError> {
        log::trace!("registry {}: set_attribute {resource}.{name}", self.name);
        let writer = self.lookup(resource)?;
        writer.set_attribute(name, value).map_err(Into::into)
    }

    /// Deliver one statistics record to the addressed writer.
    pub fn write(&self, resource: &str, record: &StatsRecord) -> Result<(), RegistryError> {
        log::trace!(
            "registry {}: write {resource} <- {}/{}/{}",
            self.name,
            record.message_flow.application,
            record.message_flow.library,
            record.message_flow.flow
        );
        let writer = self.lookup(resource)?;
        writer.write(record);
        Ok(())
    }

    /// Notify every registered writer that the host is unloading.
    pub fn shutdown(&self) {
        log::debug!("registry {}: shutting down {} writer(s)", self.name, self.writers.len());
        for writer in self.writers.values() {
            writer.shutdown();
        }
    }

    fn lookup(&self, resource: &str) -> Result<&Arc<dyn BrokerPlugin>, RegistryError> {
        self.writers
            .get(resource)
            .ok_or_else(|| RegistryError::UnknownWriter(resource.to_string()))
    }

    fn log_create_failure(&self, reason: &str) {
        let event = LogEvent::new(
            LogSeverity::Error,
            module_path!(),
            MSG_WRITER_CREATE_FAILED,
            "Statistics writer creation failed",
        )
        .with_inserts(vec![reason.to_string()]);
        self.logger.log(&event);
    }
}
