// File: crates/speedup-plots/src/main.rs
// Summary: Entry point; sets up tracing and dispatches the subcommand.

use anyhow::Result;
use clap::Parser;
use speedup_plots::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    speedup_plots::commands::run(cli.command)
}
