//! PDF Renderer
//!
//! Writes the layout as a single A4 page using the three standard Helvetica
//! faces, so no fonts need to be embedded.
//!
//! # Example
//!
//! ```rust,no_run
//! use chekku::{billing::Biller, catalog::Catalog, renderers::{InvoiceRenderer, pdf::PdfRenderer}};
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let biller = Biller::new(Catalog::default());
//! let request = biller.request("Coconut", "10".parse()?, "paid".parse()?)?;
//! let invoice = biller.invoice_now(&request)?;
//!
//! let bytes = PdfRenderer::default().render(&invoice)?;
//! std::fs::write("kalaiselvi_bill.pdf", bytes)?;
//! # Ok(())
//! # }
//! ```

use std::io;

use lopdf::{
    Dictionary, Document, Object, Stream,
    content::{Content, Operation},
    dictionary,
};

use crate::{
    layout::{
        BLACK, Cell, FontStyle, InvoiceLayout, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, Rgb,
        metrics::MM_PER_PT,
    },
    renderers::{InvoiceRenderer, RenderError},
};

/// Stroke width of table borders.
const BORDER_WIDTH_MM: f32 = 0.2;

/// Renders invoices as PDF documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfRenderer;

impl InvoiceRenderer for PdfRenderer {
    fn render_to<W: io::Write>(
        &self,
        layout: &InvoiceLayout,
        mut out: W,
    ) -> Result<(), RenderError> {
        let mut document = build_document(layout)?;

        document.save_to(&mut out)?;

        Ok(())
    }
}

fn build_document(layout: &InvoiceLayout) -> Result<Document, RenderError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let fonts = dictionary! {
        font_resource(FontStyle::Regular) => doc.add_object(type1_font("Helvetica")),
        font_resource(FontStyle::Bold) => doc.add_object(type1_font("Helvetica-Bold")),
        font_resource(FontStyle::Italic) => doc.add_object(type1_font("Helvetica-Oblique")),
    };

    let resources_id = doc.add_object(dictionary! {
        "Font" => fonts,
    });

    let operations: Vec<Operation> = layout.cells().iter().flat_map(cell_operations).collect();
    let content = Content { operations };

    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            pt(PAGE_WIDTH_MM).into(),
            pt(PAGE_HEIGHT_MM).into(),
        ],
    };

    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });

    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(win_ansi(layout.title())),
        "Producer" => Object::string_literal(concat!("chekku ", env!("CARGO_PKG_VERSION"))),
        "CreationDate" => Object::string_literal(
            layout.generated_at().strftime("D:%Y%m%d%H%M%S").to_string(),
        ),
    });

    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    Ok(doc)
}

fn type1_font(base_font: &str) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    }
}

fn font_resource(style: FontStyle) -> &'static str {
    match style {
        FontStyle::Regular => "F1",
        FontStyle::Bold => "F2",
        FontStyle::Italic => "F3",
    }
}

/// Millimetres to points.
fn pt(mm: f32) -> f32 {
    mm / MM_PER_PT
}

/// Distance from the bottom of the page in points, given millimetres from the top.
fn pt_from_bottom(mm: f32) -> f32 {
    pt(PAGE_HEIGHT_MM - mm)
}

fn color_operands(Rgb(r, g, b): Rgb) -> Vec<Object> {
    [r, g, b]
        .into_iter()
        .map(|channel| (f32::from(channel) / 255.0).into())
        .collect()
}

fn rectangle(cell: &Cell) -> Operation {
    Operation::new(
        "re",
        vec![
            pt(cell.x).into(),
            pt_from_bottom(cell.y + cell.height).into(),
            pt(cell.width).into(),
            pt(cell.height).into(),
        ],
    )
}

fn cell_operations(cell: &Cell) -> Vec<Operation> {
    let mut ops = Vec::with_capacity(12);

    if let Some(fill) = cell.style.fill {
        ops.push(Operation::new("rg", color_operands(fill)));
        ops.push(rectangle(cell));
        ops.push(Operation::new("f", vec![]));
    }

    if cell.style.border {
        ops.push(Operation::new("RG", color_operands(BLACK)));
        ops.push(Operation::new("w", vec![pt(BORDER_WIDTH_MM).into()]));
        ops.push(rectangle(cell));
        ops.push(Operation::new("S", vec![]));
    }

    if !cell.text.is_empty() {
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![font_resource(cell.style.font).into(), cell.style.size.into()],
        ));
        ops.push(Operation::new("rg", color_operands(cell.style.text_color)));
        ops.push(Operation::new(
            "Td",
            vec![
                pt(cell.text_x()).into(),
                pt_from_bottom(cell.baseline()).into(),
            ],
        ));
        ops.push(Operation::new(
            "Tj",
            vec![Object::string_literal(win_ansi(&cell.text))],
        ));
        ops.push(Operation::new("ET", vec![]));
    }

    ops
}

/// Encode text for a `WinAnsiEncoding` font. Latin-1 maps straight through;
/// anything else becomes `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}

#[cfg(test)]
mod tests {
    use jiff::civil::{DateTime, date};
    use testresult::TestResult;

    use crate::{
        catalog::Catalog, invoice::Invoice, payment::PaymentStatus, pricing::price_line,
        request::InvoiceRequest,
    };

    use super::*;

    fn invoice(generated_at: DateTime) -> TestResult<Invoice> {
        let catalog = Catalog::default();
        let request =
            InvoiceRequest::new(&catalog, "Coconut", "10".parse()?, PaymentStatus::Paid)?;

        Ok(Invoice::new(
            generated_at,
            price_line(&request, catalog.rate_per_kg())?,
            request.payment_status(),
            catalog.seller().clone(),
        ))
    }

    fn shown_text(bytes: &[u8]) -> TestResult<Vec<String>> {
        let doc = Document::load_mem(bytes)?;
        let pages = doc.get_pages();

        assert_eq!(pages.len(), 1, "bill must be a single page");

        let page_id = *pages.values().next().ok_or("no pages")?;
        let content = Content::decode(&doc.get_page_content(page_id)?)?;

        Ok(content
            .operations
            .iter()
            .filter(|op| op.operator == "Tj")
            .filter_map(|op| match op.operands.first() {
                Some(Object::String(bytes, _)) => Some(String::from_utf8_lossy(bytes).into_owned()),
                _ => None,
            })
            .collect())
    }

    #[test]
    fn renders_one_page_with_the_bill_text() -> TestResult {
        let bytes = PdfRenderer.render(&invoice(date(2025, 3, 14).at(9, 30, 0, 0))?)?;

        assert!(bytes.starts_with(b"%PDF-1.5"));

        let text = shown_text(&bytes)?;

        for expected in [
            "Kalaiselvi Traders",
            "267, EH Road, Vysarpadi, Chennai - 39",
            "Date: 14-03-2025",
            "Item",
            "Weight (kg)",
            "Rate/kg",
            "Amount",
            "Coconut",
            "10.00",
            "Rs. 35",
            "Payment Status: Paid",
            "Thank you for your business. Have a great day!",
            "Generated on: 14-03-2025 09:30",
            "Signature: __________________________",
        ] {
            assert!(text.iter().any(|t| t == expected), "missing {expected:?} in {text:?}");
        }

        assert_eq!(text.iter().filter(|t| *t == "Rs. 350.00").count(), 2);
        assert_eq!(text.iter().filter(|t| *t == "Total").count(), 1);

        Ok(())
    }

    #[test]
    fn same_invoice_renders_identical_bytes() -> TestResult {
        let invoice = invoice(date(2025, 3, 14).at(9, 30, 0, 0))?;

        assert_eq!(PdfRenderer.render(&invoice)?, PdfRenderer.render(&invoice)?);

        Ok(())
    }

    #[test]
    fn only_timestamps_differ_between_instants() -> TestResult {
        let morning = PdfRenderer.render(&invoice(date(2025, 3, 14).at(9, 30, 0, 0))?)?;
        let evening = PdfRenderer.render(&invoice(date(2025, 3, 14).at(18, 45, 0, 0))?)?;

        assert_ne!(morning, evening);

        let strip = |text: Vec<String>| -> Vec<String> {
            text.into_iter()
                .filter(|t| !t.starts_with("Generated on:"))
                .collect()
        };

        assert_eq!(strip(shown_text(&morning)?), strip(shown_text(&evening)?));

        Ok(())
    }

    #[test]
    fn info_dictionary_carries_creation_date() -> TestResult {
        let bytes = PdfRenderer.render(&invoice(date(2025, 3, 14).at(9, 30, 5, 0))?)?;
        let doc = Document::load_mem(&bytes)?;

        let info = doc.trailer.get(b"Info")?.as_reference()?;
        let created = doc.get_dictionary(info)?.get(b"CreationDate")?.as_str()?;

        assert_eq!(created, b"D:20250314093005");

        Ok(())
    }

    #[test]
    fn non_latin_text_is_replaced() {
        assert_eq!(win_ansi("Caf\u{e9} \u{20b9}"), b"Caf\xe9 ?");
    }
}
