#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the statistics output file (can also be set via
    /// STATS_FILE_PATH env var)
    #[clap(
        short,
        long,
        env = "STATS_FILE_PATH",
        default_value = "/tmp/flowstats.jsonl"
    )]
    pub output: std::path::PathBuf,

    /// Value assigned to the writer's label attribute
    #[clap(long, default_value = "")]
    pub label: String,

    /// Number of statistics records to deliver
    #[clap(short, long, default_value_t = 1)]
    pub records: u32,

    /// Enable verbose informational messages.
    #[clap(long, default_value = "true")]
    pub verbose: bool,
}

impl Args {
    pub fn output(&self) -> &std::path::Path {
        &self.output
    }
}
