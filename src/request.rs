//! Invoice requests

use crate::{
    catalog::{Catalog, CatalogError},
    payment::PaymentStatus,
    weight::Weight,
};

/// What the customer bought and whether they paid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceRequest {
    item: String,
    weight: Weight,
    payment_status: PaymentStatus,
}

impl InvoiceRequest {
    /// Create a request for an item sold in `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownItem`] if the item is not in the catalog.
    pub fn new(
        catalog: &Catalog,
        item: &str,
        weight: Weight,
        payment_status: PaymentStatus,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            item: catalog.item(item)?.to_string(),
            weight,
            payment_status,
        })
    }

    /// Catalog spelling of the item.
    pub fn item(&self) -> &str {
        &self.item
    }

    /// Weight sold.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Payment status to print on the bill.
    pub fn payment_status(&self) -> PaymentStatus {
        self.payment_status
    }
}
