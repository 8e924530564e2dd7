use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Result;
use chekku::{
    billing::Biller,
    layout::InvoiceLayout,
    payment::PaymentStatus,
    renderers::{InvoiceRenderer, text::TextRenderer},
    weight::Weight,
};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct BillArgs {
    /// Item sold, e.g. Coconut
    #[arg(short, long)]
    pub(crate) item: String,

    /// Weight in kilograms
    #[arg(short, long)]
    pub(crate) weight: Weight,

    /// Payment status (paid, not-paid)
    #[arg(short, long, default_value = "paid")]
    pub(crate) status: PaymentStatus,

    /// Directory the bill is saved in
    #[arg(short, long, default_value = ".")]
    pub(crate) out_dir: PathBuf,

    /// Print a text preview of the bill
    #[arg(long)]
    pub(crate) preview: bool,

    /// Print the bill as a base64 `data:` URI
    #[arg(long)]
    pub(crate) data_uri: bool,
}

pub(crate) fn run(biller: &Biller, args: &BillArgs) -> Result<()> {
    let request = biller.request(&args.item, args.weight, args.status)?;
    let bill = biller.bill_now(&request)?;
    let path = bill.write_to_dir(&args.out_dir)?;

    let mut out = io::stdout().lock();

    if args.preview {
        TextRenderer.render_to(&InvoiceLayout::from_invoice(bill.invoice()), &mut out)?;
        writeln!(out)?;
    }

    if args.data_uri {
        writeln!(out, "{}", bill.data_uri())?;
    }

    writeln!(out, "Saved {}", path.display())?;

    Ok(())
}
