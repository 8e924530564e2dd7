//! Invoice layout
//!
//! The bill is a fixed A4 page laid out as a list of cells, each a box with
//! optional fill and border and one line of text. Coordinates are in
//! millimetres from the top-left corner of the page. Renderers only ever see
//! the finished [`InvoiceLayout`], so every output format shows the same
//! content in the same order.

use jiff::civil::DateTime;
use smallvec::SmallVec;
use tracing::debug;

use crate::{catalog::Rupees, invoice::Invoice};

pub mod metrics;

use metrics::{MM_PER_PT, text_width_mm};

/// A4 page width.
pub const PAGE_WIDTH_MM: f32 = 210.0;

/// A4 page height.
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// Left, right and top page margin.
pub const MARGIN_MM: f32 = 10.0;

/// Height of every cell on the page.
pub const LINE_HEIGHT_MM: f32 = 10.0;

/// Horizontal gap between a cell edge and left or right aligned text.
pub const CELL_PADDING_MM: f32 = 1.0;

/// Widths of the `Item`, `Weight (kg)`, `Rate/kg` and `Amount` columns.
pub const COLUMN_WIDTHS_MM: [f32; 4] = [60.0, 40.0, 40.0, 40.0];

/// Banner and table header background.
pub const HEADER_COLOR: Rgb = Rgb(0, 51, 102);

/// Text on the banner and table header.
pub const WHITE: Rgb = Rgb(255, 255, 255);

/// Body text.
pub const BLACK: Rgb = Rgb(0, 0, 0);

/// Footer text.
pub const FOOTER_GREY: Rgb = Rgb(100, 100, 100);

/// Closing line of the footer.
pub const THANK_YOU: &str = "Thank you for your business. Have a great day!";

/// Signature line at the bottom right of the page.
pub const SIGNATURE_LINE: &str = "Signature: __________________________";

/// An RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Typeface variant of the Helvetica family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Upright
    Regular,
    /// Bold
    Bold,
    /// Oblique
    Italic,
}

/// Horizontal placement of text within its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Flush left, after the cell padding
    Left,
    /// Centred
    Center,
    /// Flush right, before the cell padding
    Right,
}

/// Which part of the bill a cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Seller name and address
    Banner,
    /// Date line under the banner
    Date,
    /// Column headings
    TableHeader,
    /// The priced line
    DataRow,
    /// Total row
    TotalRow,
    /// Payment status line
    PaymentStatus,
    /// Thank-you note, generation time and signature
    Footer,
}

/// How a cell's box and text are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellStyle {
    /// Typeface
    pub font: FontStyle,
    /// Font size in points
    pub size: f32,
    /// Text placement
    pub align: Align,
    /// Text colour
    pub text_color: Rgb,
    /// Background colour, if the box is filled
    pub fill: Option<Rgb>,
    /// Whether the box is outlined
    pub border: bool,
}

impl CellStyle {
    const fn plain(font: FontStyle, size: f32, align: Align, text_color: Rgb) -> Self {
        Self {
            font,
            size,
            align,
            text_color,
            fill: None,
            border: false,
        }
    }

    const fn banner(font: FontStyle, size: f32) -> Self {
        Self {
            fill: Some(HEADER_COLOR),
            ..Self::plain(font, size, Align::Center, WHITE)
        }
    }

    const fn bordered(self) -> Self {
        Self {
            border: true,
            ..self
        }
    }
}

/// A positioned box on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Part of the bill
    pub section: Section,
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Box width
    pub width: f32,
    /// Box height
    pub height: f32,
    /// Single line of text
    pub text: String,
    /// Drawing style
    pub style: CellStyle,
}

impl Cell {
    /// Left edge of the text once aligned inside the box.
    pub fn text_x(&self) -> f32 {
        let text_width = text_width_mm(&self.text, self.style.font, self.style.size);

        match self.style.align {
            Align::Left => self.x + CELL_PADDING_MM,
            Align::Center => self.x + (self.width - text_width) / 2.0,
            Align::Right => self.x + self.width - CELL_PADDING_MM - text_width,
        }
    }

    /// Text baseline, measured down from the top of the page.
    pub fn baseline(&self) -> f32 {
        self.y + 0.5 * self.height + 0.3 * self.style.size * MM_PER_PT
    }
}

/// Positioned content of one bill.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceLayout {
    title: String,
    generated_at: DateTime,
    cells: SmallVec<[Cell; 20]>,
}

impl InvoiceLayout {
    /// Lay out an invoice on a single page.
    pub fn from_invoice(invoice: &Invoice) -> Self {
        let mut page = PageWriter::default();

        push_banner(&mut page, invoice);
        push_table(&mut page, invoice);
        push_payment_status(&mut page, invoice);
        push_footer(&mut page, invoice);

        debug!(cells = page.cells.len(), "laid out invoice");

        Self {
            title: format!("{} - Bill", invoice.seller().name),
            generated_at: invoice.generated_at(),
            cells: page.cells,
        }
    }

    /// Document title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// When the underlying invoice was generated.
    pub fn generated_at(&self) -> DateTime {
        self.generated_at
    }

    /// Every cell in drawing order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells belonging to one section, in drawing order.
    pub fn section(&self, section: Section) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(move |cell| cell.section == section)
    }

    /// Text of each cell in a section.
    pub fn section_texts(&self, section: Section) -> Vec<&str> {
        self.section(section).map(|cell| cell.text.as_str()).collect()
    }
}

/// Places cells left to right and top to bottom, wrapping to the left margin
/// when asked to end a line.
struct PageWriter {
    x: f32,
    y: f32,
    cells: SmallVec<[Cell; 20]>,
}

impl Default for PageWriter {
    fn default() -> Self {
        Self {
            x: MARGIN_MM,
            y: MARGIN_MM,
            cells: SmallVec::new(),
        }
    }
}

impl PageWriter {
    /// Add a cell at the cursor. A zero width stretches to the right margin.
    fn cell(&mut self, section: Section, width: f32, text: String, style: CellStyle) -> &mut Self {
        let width = if width > 0.0 {
            width
        } else {
            PAGE_WIDTH_MM - MARGIN_MM - self.x
        };

        self.cells.push(Cell {
            section,
            x: self.x,
            y: self.y,
            width,
            height: LINE_HEIGHT_MM,
            text,
            style,
        });

        self.x += width;

        self
    }

    /// Move to the start of the next line plus `gap` millimetres.
    fn line_break(&mut self, gap: f32) -> &mut Self {
        self.x = MARGIN_MM;
        self.y += LINE_HEIGHT_MM + gap;

        self
    }

    /// Put the cursor at an absolute distance from the bottom of the page.
    fn jump_above_bottom(&mut self, distance: f32) -> &mut Self {
        self.x = MARGIN_MM;
        self.y = PAGE_HEIGHT_MM - distance;

        self
    }
}

fn push_banner(page: &mut PageWriter, invoice: &Invoice) {
    let seller = invoice.seller();

    page.cell(
        Section::Banner,
        0.0,
        seller.name.clone(),
        CellStyle::banner(FontStyle::Bold, 18.0),
    )
    .line_break(0.0)
    .cell(
        Section::Banner,
        0.0,
        seller.address.clone(),
        CellStyle::banner(FontStyle::Regular, 12.0),
    )
    .line_break(5.0)
    .cell(
        Section::Date,
        0.0,
        format!("Date: {}", invoice.date_label()),
        CellStyle::plain(FontStyle::Regular, 11.0, Align::Right, BLACK),
    )
    .line_break(5.0);
}

fn push_table(page: &mut PageWriter, invoice: &Invoice) {
    let [item_w, weight_w, rate_w, amount_w] = COLUMN_WIDTHS_MM;
    let line = invoice.line();

    let heading = CellStyle {
        fill: Some(HEADER_COLOR),
        ..CellStyle::plain(FontStyle::Bold, 12.0, Align::Center, WHITE)
    }
    .bordered();

    let body = CellStyle::plain(FontStyle::Regular, 12.0, Align::Center, BLACK).bordered();
    let total = CellStyle::plain(FontStyle::Bold, 12.0, Align::Center, BLACK).bordered();

    for (width, title) in COLUMN_WIDTHS_MM
        .into_iter()
        .zip(["Item", "Weight (kg)", "Rate/kg", "Amount"])
    {
        page.cell(Section::TableHeader, width, title.to_string(), heading);
    }

    page.line_break(0.0)
        .cell(Section::DataRow, item_w, line.item().to_string(), body)
        .cell(Section::DataRow, weight_w, line.weight().to_string(), body)
        .cell(Section::DataRow, rate_w, rate_label(line.rate_per_kg()), body)
        .cell(Section::DataRow, amount_w, amount_label(line.amount()), body)
        .line_break(0.0)
        .cell(
            Section::TotalRow,
            item_w + weight_w + rate_w,
            "Total".to_string(),
            CellStyle {
                align: Align::Right,
                ..total
            },
        )
        .cell(Section::TotalRow, amount_w, amount_label(invoice.total()), total)
        .line_break(10.0);
}

fn push_payment_status(page: &mut PageWriter, invoice: &Invoice) {
    page.cell(
        Section::PaymentStatus,
        0.0,
        format!("Payment Status: {}", invoice.payment_status()),
        CellStyle::plain(FontStyle::Bold, 12.0, Align::Left, BLACK),
    );
}

fn push_footer(page: &mut PageWriter, invoice: &Invoice) {
    let footer = |font, align| CellStyle::plain(font, 10.0, align, FOOTER_GREY);

    page.jump_above_bottom(30.0)
        .cell(
            Section::Footer,
            0.0,
            THANK_YOU.to_string(),
            footer(FontStyle::Italic, Align::Center),
        )
        .jump_above_bottom(20.0)
        .cell(
            Section::Footer,
            0.0,
            format!("Generated on: {}", invoice.generated_label()),
            footer(FontStyle::Regular, Align::Left),
        )
        .jump_above_bottom(10.0)
        .cell(
            Section::Footer,
            0.0,
            SIGNATURE_LINE.to_string(),
            footer(FontStyle::Regular, Align::Right),
        );
}

/// Rate as printed on the bill, without trailing zeros (`Rs. 35`).
pub fn rate_label(rate: Rupees) -> String {
    format!("Rs. {}", rate.amount().normalize())
}

/// Amount as printed on the bill, always with paise (`Rs. 350.00`).
pub fn amount_label(amount: Rupees) -> String {
    format!("Rs. {:.2}", amount.amount())
}
