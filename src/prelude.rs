//! Chekku prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    billing::{Bill, Biller, BillingError},
    catalog::{Catalog, CatalogError, Rupees},
    invoice::Invoice,
    layout::{InvoiceLayout, Section},
    payment::{PaymentStatus, PaymentStatusError},
    pricing::{PricedLine, PricingError, amount_for, price_line},
    renderers::{InvoiceRenderer, RenderError, pdf::PdfRenderer, text::TextRenderer},
    request::InvoiceRequest,
    seller::SellerIdentity,
    weight::{Weight, WeightError},
};
