#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Application name carried by the simulated records
    #[clap(long, default_value = "App")]
    pub application: String,

    /// Library name carried by the simulated records
    #[clap(long, default_value = "Lib")]
    pub library: String,

    /// Message flow name carried by the simulated records
    #[clap(long, default_value = "Flow")]
    pub flow: String,

    /// Value assigned to property1 before records are delivered
    #[clap(long, default_value = "")]
    pub property1: String,

    /// Value assigned to property2 before records are delivered
    #[clap(long, default_value = "")]
    pub property2: String,

    /// Number of statistics records to deliver
    #[clap(short, long, default_value_t = 1)]
    pub records: u32,

    /// Enable verbose informational messages.
    #[clap(long, default_value = "true")]
    pub verbose: bool,
}
