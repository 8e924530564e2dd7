//! Invoice

use jiff::civil::DateTime;

use crate::{catalog::Rupees, payment::PaymentStatus, pricing::PricedLine, seller::SellerIdentity};

/// A single-line bill ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    /// Wall-clock time the bill was produced
    generated_at: DateTime,

    /// The one priced line on the bill
    line: PricedLine,

    /// Whether the customer has paid
    payment_status: PaymentStatus,

    /// Who issued the bill
    seller: SellerIdentity,
}

impl Invoice {
    /// Create a new invoice with the given details.
    pub fn new(
        generated_at: DateTime,
        line: PricedLine,
        payment_status: PaymentStatus,
        seller: SellerIdentity,
    ) -> Self {
        Self {
            generated_at,
            line,
            payment_status,
            seller,
        }
    }

    /// Wall-clock time the bill was produced.
    pub fn generated_at(&self) -> DateTime {
        self.generated_at
    }

    /// The priced line.
    pub fn line(&self) -> &PricedLine {
        &self.line
    }

    /// Payment status.
    pub fn payment_status(&self) -> PaymentStatus {
        self.payment_status
    }

    /// Seller printed in the header.
    pub fn seller(&self) -> &SellerIdentity {
        &self.seller
    }

    /// Amount due on the bill; the total equals the single line's amount.
    pub fn total(&self) -> Rupees {
        self.line.amount()
    }

    /// Date as printed in the header, e.g. `14-03-2025`.
    pub fn date_label(&self) -> String {
        self.generated_at.strftime("%d-%m-%Y").to_string()
    }

    /// Time stamp as printed in the footer, e.g. `14-03-2025 09:30`.
    pub fn generated_label(&self) -> String {
        self.generated_at.strftime("%d-%m-%Y %H:%M").to_string()
    }
}
