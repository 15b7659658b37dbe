//! voltix — an ASCII battery gauge for the terminal.
//!
//! Run with:  `voltix --level 15 --status Discharging --secs 120`

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use voltix_app::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the gauge on stdout.
    // RUST_LOG controls verbosity (default: warn).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("voltix v{} starting", env!("CARGO_PKG_VERSION"));

    voltix_app::run(&cli).map_err(Into::into)
}
