//! Seller

use serde::Deserialize;

/// Name of the mill printed in the invoice banner.
pub const SELLER_NAME: &str = "Kalaiselvi Traders";

/// Postal address printed under the seller name.
pub const SELLER_ADDRESS: &str = "267, EH Road, Vysarpadi, Chennai - 39";

/// Who is issuing the invoice.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SellerIdentity {
    /// Trading name
    pub name: String,

    /// Single-line postal address
    pub address: String,
}

impl Default for SellerIdentity {
    fn default() -> Self {
        Self {
            name: SELLER_NAME.to_string(),
            address: SELLER_ADDRESS.to_string(),
        }
    }
}
