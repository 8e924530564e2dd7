use std::io::{self, Write};

use anyhow::Result;
use chekku::{billing::Biller, layout::rate_label};

pub(crate) fn run(biller: &Biller) -> Result<()> {
    let catalog = biller.catalog();
    let mut out = io::stdout().lock();

    for item in catalog.items() {
        writeln!(out, "{item}")?;
    }

    writeln!(out, "\nRate/kg: {}", rate_label(catalog.rate_per_kg()))?;

    Ok(())
}
