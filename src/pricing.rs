//! Pricing
//!
//! Every item is charged the same rate per kilogram, so the amount only
//! depends on the weight.

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::Money;
use thiserror::Error;

use crate::{catalog::Rupees, request::InvoiceRequest, weight::Weight};

/// Errors that can occur while pricing a line.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// The product of weight and rate does not fit in a decimal.
    #[error("amount overflowed for {weight} kg at {rate} per kg")]
    Overflow {
        /// Weight being priced
        weight: Weight,
        /// Rate per kilogram
        rate: Decimal,
    },
}

/// A priced line on the bill.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedLine {
    item: String,
    weight: Weight,
    rate_per_kg: Rupees,
    amount: Rupees,
}

impl PricedLine {
    /// Item sold.
    pub fn item(&self) -> &str {
        &self.item
    }

    /// Weight sold.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Rate applied per kilogram.
    pub fn rate_per_kg(&self) -> Rupees {
        self.rate_per_kg
    }

    /// Weight times rate, rounded to paise.
    pub fn amount(&self) -> Rupees {
        self.amount
    }
}

/// Calculates `weight × rate`, rounded to two decimal places.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the product cannot be represented.
pub fn amount_for(weight: Weight, rate: Rupees) -> Result<Rupees, PricingError> {
    let mut amount = weight
        .kg()
        .checked_mul(*rate.amount())
        .ok_or(PricingError::Overflow {
            weight,
            rate: *rate.amount(),
        })?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    // Always carry paise, so 350 is 350.00.
    amount.rescale(2);

    Ok(Money::from_decimal(amount, rate.currency()))
}

/// Price the requested item at the uniform rate.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the amount cannot be represented.
pub fn price_line(
    request: &InvoiceRequest,
    rate_per_kg: Rupees,
) -> Result<PricedLine, PricingError> {
    let amount = amount_for(request.weight(), rate_per_kg)?;

    Ok(PricedLine {
        item: request.item().to_string(),
        weight: request.weight(),
        rate_per_kg,
        amount,
    })
}
