mod commands;
mod terminal;

use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

use anyhow::Context;
use commands::CommandLine;
use probr_common::config::ScanConfig;
use probr_common::network::target;
use probr_core::network::tcp::TcpProber;
use probr_core::report::ConsoleReporter;
use probr_core::scanner;

use crate::terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    let file = File::open(&commands.file)
        .with_context(|| format!("failed to open host list {}", commands.file.display()))?;
    let hosts = target::read_host_lines(BufReader::new(file))?;
    let ports = target::parse_port_list(&commands.ports)?;

    let cfg = ScanConfig {
        ports,
        show_failures: commands.show_failures,
        ..ScanConfig::default()
    };

    let prober = Arc::new(TcpProber::new(cfg.connect_timeout));
    scanner::perform_sweep(hosts, cfg, prober, Arc::new(ConsoleReporter)).await;

    Ok(())
}
