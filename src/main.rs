//! Chekku command-line billing

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

mod cli;

fn main() -> ExitCode {
    // Load .env file if present (ignore if missing)
    _ = dotenvy::dotenv();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_err| EnvFilter::new("info")),
        )
        .init();

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(run_error) => {
            // Reported outside tracing so a silenced filter still shows it.
            _ = writeln!(io::stderr().lock(), "Error: {run_error:#}");

            ExitCode::FAILURE
        }
    }
}
