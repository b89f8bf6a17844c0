pub mod broker_plugin;
pub mod stats_writer;
