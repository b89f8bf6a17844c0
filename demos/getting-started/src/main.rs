mod cli;
mod writer;

use clap::Parser;
use flowstats_rust::plugin::{
    MessageFlowIdentity, StatsRecord, StatsWriterWrapper, SystemLogger,
};
use flowstats_rust::{RegistryError, WriterRegistry};
use log::info;
use std::sync::Arc;
use writer::{GettingStartedStatsWriter, FORMAT_NAME, RESOURCE_NAME};

/// Read one attribute through the caller-allocates buffer contract,
/// retrying once with the reported required capacity.
fn read_attribute(registry: &WriterRegistry, name: &str) -> Result<String, RegistryError> {
    let mut buffer = vec![0u16; 16];
    let copied = match registry.attribute(RESOURCE_NAME, name, &mut buffer) {
        Ok(copied) => copied,
        Err(RegistryError::Attribute(
            flowstats_rust::plugin::AttributeError::BufferTooSmall { required },
        )) => {
            buffer = vec![0u16; required];
            registry.attribute(RESOURCE_NAME, name, &mut buffer)?
        }
        Err(e) => return Err(e),
    };
    let units: Vec<u16> = buffer.iter().copied().take(copied).collect();
    Ok(String::from_utf16(&units).unwrap_or_default())
}

fn main() {
    let args = cli::Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let logger = Arc::new(SystemLogger::new());

    let mut registry = WriterRegistry::new(Some("getting-started"), logger.clone());
    let writer_logger = logger.clone();
    let registered =
        registry.register(|| GettingStartedStatsWriter::new(writer_logger).map(StatsWriterWrapper::new));

    let Some(resource) = registered else {
        eprintln!("Failed to create statistics writer");
        std::process::exit(1);
    };
    info!("Registered statistics writer '{resource}' (format '{FORMAT_NAME}')");

    for (name, value) in [
        ("property1", args.property1.as_str()),
        ("property2", args.property2.as_str()),
    ] {
        if let Err(e) = registry.set_attribute(RESOURCE_NAME, name, value) {
            eprintln!("Failed to set {name}: {e}");
            std::process::exit(1);
        }
    }

    // Deliver the requested number of snapshot records, the way the host
    // would on each snapshot interval.
    for _ in 0..args.records {
        let record = StatsRecord::snapshot(MessageFlowIdentity::new(
            args.application.clone(),
            args.library.clone(),
            args.flow.clone(),
        ));
        if let Err(e) = registry.write(RESOURCE_NAME, &record) {
            eprintln!("Failed to write record: {e}");
            std::process::exit(1);
        }
    }

    // Read the configuration back through the buffer contract, as
    // administrative tooling would when reporting properties.
    for name in ["property1", "property2"] {
        match read_attribute(&registry, name) {
            Ok(value) => info!("{RESOURCE_NAME} {name} = '{value}'"),
            Err(e) => {
                eprintln!("Failed to read {name}: {e}");
                std::process::exit(1);
            }
        }
    }

    registry.shutdown();
}
