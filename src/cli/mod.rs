use std::path::PathBuf;

use anyhow::{Context, Result};
use chekku::{billing::Biller, catalog::Catalog};
use clap::{Parser, Subcommand};
use tracing::debug;

mod bill;
mod items;
mod quote;

#[derive(Debug, Parser)]
#[command(name = "chekku", about = "Oil mill billing", long_about = None)]
pub(crate) struct Cli {
    /// YAML catalog overriding the built-in seller, items and rate
    #[arg(long, global = true, env = "CHEKKU_CATALOG")]
    catalog: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, env = "RUST_LOG", default_value = "info")]
    pub(crate) log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the items on sale and the rate per kg
    Items,
    /// Show the amount for a weight without producing a bill
    Quote(quote::QuoteArgs),
    /// Render and save a bill
    Bill(bill::BillArgs),
}

impl Cli {
    pub(crate) fn run(self) -> Result<()> {
        let biller = Biller::new(self.load_catalog()?);

        match self.command {
            Commands::Items => items::run(&biller),
            Commands::Quote(args) => quote::run(&biller, &args),
            Commands::Bill(args) => bill::run(&biller, &args),
        }
    }

    fn load_catalog(&self) -> Result<Catalog> {
        let Some(path) = &self.catalog else {
            return Ok(Catalog::default());
        };

        debug!(path = %path.display(), "using catalog file");

        Catalog::from_path(path)
            .with_context(|| format!("failed to load catalog {}", path.display()))
    }
}
