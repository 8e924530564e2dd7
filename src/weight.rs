//! Weights

use std::{fmt, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Errors raised when a weight is rejected at the input boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WeightError {
    /// Weight was below zero.
    #[error("weight must not be negative, got {0} kg")]
    Negative(Decimal),

    /// Weight could not be parsed as a decimal number.
    #[error("weight must be a number of kilograms, got {0:?}")]
    Invalid(String),
}

/// A non-negative weight in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Weight(Decimal);

impl Weight {
    /// Zero kilograms.
    pub const ZERO: Weight = Weight(Decimal::ZERO);

    /// Creates a weight from a decimal number of kilograms.
    ///
    /// # Errors
    ///
    /// Returns [`WeightError::Negative`] if `kg` is below zero.
    pub fn new(kg: Decimal) -> Result<Self, WeightError> {
        if kg.is_sign_negative() && !kg.is_zero() {
            return Err(WeightError::Negative(kg));
        }

        // Normalise "-0" so it prints as "0.00".
        Ok(Self(kg.abs()))
    }

    /// Weight in kilograms.
    pub fn kg(self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Weight {
    type Error = WeightError;

    fn try_from(kg: Decimal) -> Result<Self, Self::Error> {
        Self::new(kg)
    }
}

impl FromStr for Weight {
    type Err = WeightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let kg = trimmed
            .parse::<Decimal>()
            .or_else(|_err| Decimal::from_scientific(trimmed))
            .map_err(|_err| WeightError::Invalid(s.to_string()))?;

        Self::new(kg)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kg = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        write!(f, "{kg:.2}")
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_whole_and_fractional_kilograms() -> TestResult {
        assert_eq!("10".parse::<Weight>()?.kg(), Decimal::new(10, 0));
        assert_eq!(" 2.5 ".parse::<Weight>()?.kg(), Decimal::new(25, 1));

        Ok(())
    }

    #[test]
    fn rejects_negative_weight() {
        assert_eq!(
            "-0.5".parse::<Weight>(),
            Err(WeightError::Negative(Decimal::new(-5, 1)))
        );
    }

    #[test]
    fn rejects_non_numeric_weight() {
        assert!(matches!(
            "ten".parse::<Weight>(),
            Err(WeightError::Invalid(input)) if input == "ten"
        ));
    }

    #[test]
    fn negative_zero_is_zero() -> TestResult {
        let weight = "-0".parse::<Weight>()?;

        assert_eq!(weight, Weight::ZERO);
        assert_eq!(weight.to_string(), "0.00");

        Ok(())
    }

    #[test]
    fn displays_two_decimal_places() -> TestResult {
        assert_eq!(Weight::new(Decimal::new(25, 1))?.to_string(), "2.50");

        Ok(())
    }

    #[test]
    fn display_rounds_to_the_nearest_hundredth() -> TestResult {
        assert_eq!("2.559".parse::<Weight>()?.to_string(), "2.56");
        assert_eq!("2.555".parse::<Weight>()?.to_string(), "2.56");
        assert_eq!("2.554".parse::<Weight>()?.to_string(), "2.55");

        Ok(())
    }
}
