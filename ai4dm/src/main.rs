//! Data quality assessment tool for comma-separated files.
//!
//! Everything runs locally: files are read from disk, scored in memory and
//! the report goes to stdout or a file.

use ai4dm::cli::Cli;
use ai4dm_core::init_logging;
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.global.verbose, cli.global.quiet)?;

    ai4dm::run(&cli).await
}
