//! Billing
//!
//! Ties the catalog, pricing and rendering together: one request in, one
//! rendered bill out.

use std::{
    fs,
    path::{Path, PathBuf},
};

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use jiff::{Zoned, civil::DateTime};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    catalog::{Catalog, CatalogError},
    invoice::Invoice,
    payment::PaymentStatus,
    pricing::{PricedLine, PricingError, price_line},
    renderers::{InvoiceRenderer, RenderError, pdf::PdfRenderer},
    request::InvoiceRequest,
    weight::Weight,
};

/// Errors that can occur while producing a bill.
#[derive(Debug, Error)]
pub enum BillingError {
    /// The item is not sold or the catalog could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The line could not be priced.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// The document could not be produced.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The bill could not be saved.
    #[error("Failed to save bill to {path}: {source}")]
    Save {
        /// Destination path
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },
}

/// Prices and renders bills against one catalog.
#[derive(Debug, Clone, Default)]
pub struct Biller {
    catalog: Catalog,
}

impl Biller {
    /// Create a biller for `catalog`.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// The catalog bills are priced against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Build a request for an item in this biller's catalog.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::Catalog`] if the item is not sold.
    pub fn request(
        &self,
        item: &str,
        weight: Weight,
        payment_status: PaymentStatus,
    ) -> Result<InvoiceRequest, BillingError> {
        Ok(InvoiceRequest::new(
            &self.catalog,
            item,
            weight,
            payment_status,
        )?)
    }

    /// Price `weight` kilograms of `item` without producing a bill.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is not sold or the amount overflows.
    pub fn quote(&self, item: &str, weight: Weight) -> Result<PricedLine, BillingError> {
        let request = self.request(item, weight, PaymentStatus::default())?;
        let line = price_line(&request, self.catalog.rate_per_kg())?;

        debug!(item = line.item(), weight = %line.weight(), amount = %line.amount(), "quoted");

        Ok(line)
    }

    /// Price a request and stamp it with `generated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::Pricing`] if the amount overflows.
    pub fn invoice(
        &self,
        request: &InvoiceRequest,
        generated_at: DateTime,
    ) -> Result<Invoice, BillingError> {
        let line = price_line(request, self.catalog.rate_per_kg())?;

        Ok(Invoice::new(
            generated_at,
            line,
            request.payment_status(),
            self.catalog.seller().clone(),
        ))
    }

    /// Price a request, stamped with the local wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::Pricing`] if the amount overflows.
    pub fn invoice_now(&self, request: &InvoiceRequest) -> Result<Invoice, BillingError> {
        self.invoice(request, Zoned::now().datetime())
    }

    /// Price and render a request as a PDF bill.
    ///
    /// # Errors
    ///
    /// Returns an error if pricing or rendering fails.
    #[tracing::instrument(
        name = "billing.bill",
        skip(self, request),
        fields(item = request.item(), status = %request.payment_status()),
        err
    )]
    pub fn bill(
        &self,
        request: &InvoiceRequest,
        generated_at: DateTime,
    ) -> Result<Bill, BillingError> {
        self.render(self.invoice(request, generated_at)?)
    }

    /// Price and render a request, stamped with the local wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns an error if pricing or rendering fails.
    #[tracing::instrument(
        name = "billing.bill_now",
        skip(self, request),
        fields(item = request.item(), status = %request.payment_status()),
        err
    )]
    pub fn bill_now(&self, request: &InvoiceRequest) -> Result<Bill, BillingError> {
        self.render(self.invoice_now(request)?)
    }

    fn render(&self, invoice: Invoice) -> Result<Bill, BillingError> {
        let pdf = PdfRenderer.render(&invoice)?;

        debug!(bytes = pdf.len(), "rendered bill");

        Ok(Bill {
            invoice,
            pdf,
            file_name: self.catalog.output_file().to_string(),
        })
    }
}

/// A rendered bill.
#[derive(Debug, Clone)]
pub struct Bill {
    invoice: Invoice,
    pdf: Vec<u8>,
    file_name: String,
}

impl Bill {
    /// The invoice that was rendered.
    pub fn invoice(&self) -> &Invoice {
        &self.invoice
    }

    /// PDF document bytes.
    pub fn pdf(&self) -> &[u8] {
        &self.pdf
    }

    /// File name to offer for download.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The PDF as a `data:` URI, suitable for inline preview in a browser.
    pub fn data_uri(&self) -> String {
        format!("data:application/pdf;base64,{}", BASE64.encode(&self.pdf))
    }

    /// Save the PDF into `dir` under [`Bill::file_name`], replacing any
    /// previous bill, and return the path written.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::Save`] if the file cannot be written.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<PathBuf, BillingError> {
        let path = dir.as_ref().join(&self.file_name);

        fs::write(&path, &self.pdf).map_err(|source| BillingError::Save {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), bytes = self.pdf.len(), "saved bill");

        Ok(path)
    }
}
