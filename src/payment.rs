//! Payment status

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Error returned when a payment status cannot be recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown payment status {0:?}, expected \"paid\" or \"not-paid\"")]
pub struct PaymentStatusError(String);

/// Whether the bill has been settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaymentStatus {
    /// Paid in full at the counter.
    #[default]
    Paid,

    /// Amount still outstanding.
    NotPaid,
}

impl PaymentStatus {
    /// Label printed on the invoice.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::NotPaid => "Not Paid",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentStatus {
    type Err = PaymentStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paid" => Ok(Self::Paid),
            "not-paid" | "not paid" | "not_paid" | "notpaid" | "unpaid" => Ok(Self::NotPaid),
            _ => Err(PaymentStatusError(s.to_string())),
        }
    }
}
