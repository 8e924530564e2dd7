//! Text Renderer
//!
//! Prints the bill to a terminal: banner lines, the item table and the
//! footer, all taken from the same layout as the PDF.

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};

use crate::{
    layout::{InvoiceLayout, Section},
    renderers::{InvoiceRenderer, RenderError},
};

/// Renders invoices as plain text with a box-drawn table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl InvoiceRenderer for TextRenderer {
    fn render_to<W: io::Write>(
        &self,
        layout: &InvoiceLayout,
        mut out: W,
    ) -> Result<(), RenderError> {
        let table = build_table(layout);
        let width = table
            .lines()
            .next()
            .map_or(0, |line| line.chars().count());

        for line in layout.section_texts(Section::Banner) {
            writeln!(out, "{line:^width$}")?;
        }

        for line in layout.section_texts(Section::Date) {
            writeln!(out, "{line:>width$}")?;
        }

        writeln!(out, "{table}")?;

        for line in layout.section_texts(Section::PaymentStatus) {
            writeln!(out, "\n{line}")?;
        }

        writeln!(out)?;

        for line in layout.section_texts(Section::Footer) {
            writeln!(out, "{line}")?;
        }

        Ok(())
    }
}

fn build_table(layout: &InvoiceLayout) -> String {
    let mut builder = Builder::default();

    builder.push_record(layout.section_texts(Section::TableHeader));
    builder.push_record(layout.section_texts(Section::DataRow));

    // The total label spans the first three columns on paper.
    let mut total_row = vec![""; 2];
    total_row.extend(layout.section_texts(Section::TotalRow));
    builder.push_record(total_row);

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(1..), Alignment::right());
    table.modify(Rows::first(), Alignment::center());

    table.to_string()
}
