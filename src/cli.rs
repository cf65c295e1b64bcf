use crate::app::DEFAULT_ENDPOINT;
use clap::Parser;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BUILD_NUMBER"));

#[derive(Parser, Debug)]
#[command(name = "adt", version = VERSION, about = "Admin record table TUI")]
pub struct Cli {
    /// Endpoint serving the JSON array of member records
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    pub url: String,

    /// Write debug-level logs (default is warnings only)
    #[arg(short, long)]
    pub verbose: bool,
}
