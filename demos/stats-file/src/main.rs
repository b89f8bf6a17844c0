mod cli;
mod writer;

use clap::Parser;
use flowstats_rust::plugin::{
    MessageFlowIdentity, StatsRecord, StatsWriterWrapper, SystemLogger,
};
use flowstats_rust::WriterRegistry;
use log::info;
use std::sync::Arc;
use writer::{FileStatsWriter, FORMAT_NAME, RESOURCE_NAME};

fn main() {
    let args = cli::Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Warn
        })
        .init();

    if args.verbose {
        info!("Starting file statistics writer");
        info!("Output path: {}", args.output().display());
    }

    let mut registry = WriterRegistry::new(Some("stats-file"), Arc::new(SystemLogger::new()));
    let output = args.output().to_path_buf();
    let registered = registry.register(|| FileStatsWriter::new(output).map(StatsWriterWrapper::new));

    let Some(resource) = registered else {
        eprintln!("Failed to create file statistics writer");
        std::process::exit(1);
    };
    info!("Registered statistics writer '{resource}' (format '{FORMAT_NAME}')");

    if let Err(e) = registry.set_attribute(RESOURCE_NAME, "label", &args.label) {
        eprintln!("Failed to set label: {e}");
        std::process::exit(1);
    }

    for n in 0..args.records {
        let record = StatsRecord::snapshot(MessageFlowIdentity::new(
            "SampleApplication",
            "SampleLibrary",
            format!("SampleFlow{n}"),
        ));
        if let Err(e) = registry.write(RESOURCE_NAME, &record) {
            eprintln!("Failed to write record: {e}");
            std::process::exit(1);
        }
    }

    registry.shutdown();
    info!("Wrote {} record(s) to {}", args.records, args.output().display());
}
