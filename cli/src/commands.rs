use std::path::PathBuf;

use clap::Parser;
use probr_common::config::DEFAULT_PORTS;

#[derive(Parser)]
#[command(name = "probr")]
#[command(about = "A bulk TCP reachability prober.")]
pub struct CommandLine {
    /// Comma separated list of ports to check
    #[arg(short, long, default_value = DEFAULT_PORTS)]
    pub ports: String,

    /// Path to a file with one host per line
    #[arg(short, long)]
    pub file: PathBuf,

    /// Print a line when a connection attempt fails
    #[arg(long)]
    pub show_failures: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
