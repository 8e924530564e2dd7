use std::io::{self, Write};

use anyhow::Result;
use chekku::{billing::Biller, layout::amount_label, weight::Weight};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct QuoteArgs {
    /// Item sold, e.g. Coconut
    #[arg(short, long)]
    pub(crate) item: String,

    /// Weight in kilograms
    #[arg(short, long)]
    pub(crate) weight: Weight,
}

pub(crate) fn run(biller: &Biller, args: &QuoteArgs) -> Result<()> {
    let line = biller.quote(&args.item, args.weight)?;

    writeln!(
        io::stdout().lock(),
        "Total Amount: {}",
        amount_label(line.amount())
    )?;

    Ok(())
}
