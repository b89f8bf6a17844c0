//! Host-side management of statistics writers.
//!
//! The broker runtime addresses writers by resource name: it creates each
//! writer once through a registration factory, drives attribute access and
//! record delivery against the registered instance, and tears everything down
//! at unload. [`WriterRegistry`] is that dispatch surface.

pub mod registry;

pub use registry::{RegistryError, WriterRegistry};
