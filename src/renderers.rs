//! Renderers
//!
//! A renderer turns a finished [`InvoiceLayout`] into bytes.

use std::io;

use thiserror::Error;

use crate::{invoice::Invoice, layout::InvoiceLayout};

pub mod pdf;
pub mod text;

/// Errors that can occur while rendering a bill.
#[derive(Debug, Error)]
pub enum RenderError {
    /// PDF object encoding failed.
    #[error("Failed to encode PDF: {0}")]
    Pdf(#[from] lopdf::Error),

    /// Failed to write to the output.
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Serialises an invoice layout to some output format.
pub trait InvoiceRenderer {
    /// Write the rendered layout to `out`.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if encoding or writing fails.
    fn render_to<W: io::Write>(&self, layout: &InvoiceLayout, out: W) -> Result<(), RenderError>;

    /// Lay out `invoice` and render it into a fresh buffer.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if encoding fails.
    fn render(&self, invoice: &Invoice) -> Result<Vec<u8>, RenderError> {
        let mut bytes = Vec::new();

        self.render_to(&InvoiceLayout::from_invoice(invoice), &mut bytes)?;

        Ok(bytes)
    }
}
