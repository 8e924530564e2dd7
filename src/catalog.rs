//! Catalog
//!
//! The catalog holds everything about the mill that does not change between
//! bills: who is selling, what can be sold, and the per-kilogram rate.
//! The built-in defaults can be overridden from a YAML file:
//!
//! ```yaml
//! seller:
//!   name: Kalaiselvi Traders
//!   address: 267, EH Road, Vysarpadi, Chennai - 39
//! rate_per_kg: "35 INR"
//! items: [Coconut, Gingelly, Groundnut]
//! output_file: kalaiselvi_bill.pdf
//! ```

use std::{fs, path::Path};

use rust_decimal::Decimal;
use rusty_money::{
    Money,
    iso::{Currency, INR},
};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::seller::SellerIdentity;

/// Items sold by the mill, in display order.
pub const ITEMS: [&str; 3] = ["Coconut", "Gingelly", "Groundnut"];

/// Rate charged for every item, in rupees per kilogram.
pub const RATE_PER_KG: i64 = 35;

/// File name the rendered bill is saved under.
pub const OUTPUT_FILE: &str = "kalaiselvi_bill.pdf";

/// Money in the mill's currency.
pub type Rupees = Money<'static, Currency>;

/// Catalog loading and lookup errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading the catalog file
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Rate was not in the `AMOUNT CURRENCY` format
    #[error("Invalid rate format: {0}")]
    InvalidRate(String),

    /// Rate was given in a currency other than rupees
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Rate was below zero
    #[error("Rate per kg must not be negative: {0}")]
    NegativeRate(String),

    /// Catalog lists no items
    #[error("Catalog must list at least one item")]
    NoItems,

    /// Output file name was blank
    #[error("Output file name must not be empty")]
    EmptyOutputFile,

    /// Requested item is not sold
    #[error("Unknown item {0:?}")]
    UnknownItem(String),
}

/// Catalog file as written on disk; every field falls back to the default.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    seller: Option<SellerIdentity>,
    rate_per_kg: Option<String>,
    items: Option<Vec<String>>,
    output_file: Option<String>,
}

/// Seller, items and rate used to price and render bills.
#[derive(Debug, Clone)]
pub struct Catalog {
    seller: SellerIdentity,
    rate_per_kg: Rupees,
    items: Vec<String>,
    output_file: String,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            seller: SellerIdentity::default(),
            rate_per_kg: Money::from_decimal(Decimal::from(RATE_PER_KG), INR),
            items: ITEMS.iter().map(ToString::to_string).collect(),
            output_file: OUTPUT_FILE.to_string(),
        }
    }
}

impl Catalog {
    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if any
    /// field it sets is invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        debug!(path = %path.display(), "loading catalog");

        Self::from_yaml_str(&contents)
    }

    /// Parse a catalog from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed, the rate is malformed,
    /// negative or not in INR, the item list is empty, or the output file
    /// name is blank.
    pub fn from_yaml_str(contents: &str) -> Result<Self, CatalogError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let file: Option<CatalogFile> = serde_norway::from_str(contents)?;

        file.unwrap_or_default().try_into()
    }

    /// Who is issuing the bills.
    pub fn seller(&self) -> &SellerIdentity {
        &self.seller
    }

    /// Uniform rate per kilogram.
    pub fn rate_per_kg(&self) -> Rupees {
        self.rate_per_kg
    }

    /// Item names in display order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// File name bills are saved under.
    pub fn output_file(&self) -> &str {
        &self.output_file
    }

    /// Resolve an item name, ignoring case, to its catalog spelling.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownItem`] if the mill does not sell it.
    pub fn item(&self, name: &str) -> Result<&str, CatalogError> {
        let wanted = name.trim();

        self.items
            .iter()
            .find(|item| item.eq_ignore_ascii_case(wanted))
            .map(String::as_str)
            .ok_or_else(|| CatalogError::UnknownItem(name.to_string()))
    }
}

impl TryFrom<CatalogFile> for Catalog {
    type Error = CatalogError;

    fn try_from(file: CatalogFile) -> Result<Self, Self::Error> {
        let defaults = Catalog::default();

        let rate_per_kg = match file.rate_per_kg {
            Some(rate) => parse_rate(&rate)?,
            None => defaults.rate_per_kg,
        };

        let items = match file.items {
            Some(items) => items
                .into_iter()
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect(),
            None => defaults.items,
        };

        if items.is_empty() {
            return Err(CatalogError::NoItems);
        }

        let output_file = match file.output_file {
            Some(name) if name.trim().is_empty() => return Err(CatalogError::EmptyOutputFile),
            Some(name) => name.trim().to_string(),
            None => defaults.output_file,
        };

        Ok(Catalog {
            seller: file.seller.unwrap_or(defaults.seller),
            rate_per_kg,
            items,
            output_file,
        })
    }
}

/// Parse a rate string (e.g., "35 INR") into rupees.
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a decimal number, is negative or is finer than a
/// paisa, or if the currency is not INR.
pub fn parse_rate(s: &str) -> Result<Rupees, CatalogError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(CatalogError::InvalidRate(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| CatalogError::InvalidRate(s.to_string()))?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(CatalogError::NegativeRate(s.to_string()));
    }

    if amount.normalize().scale() > 2 {
        return Err(CatalogError::InvalidRate(format!(
            "Rate must not have more than two decimal places, got: {s}"
        )));
    }

    if *currency_code != INR.iso_alpha_code {
        return Err(CatalogError::UnknownCurrency((*currency_code).to_string()));
    }

    Ok(Money::from_decimal(amount, INR))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn default_catalog_matches_the_mill() {
        let catalog = Catalog::default();

        assert_eq!(catalog.items(), ["Coconut", "Gingelly", "Groundnut"]);
        assert_eq!(*catalog.rate_per_kg().amount(), Decimal::from(35));
        assert_eq!(catalog.seller().name, "Kalaiselvi Traders");
        assert_eq!(catalog.output_file(), "kalaiselvi_bill.pdf");
    }

    #[test]
    fn item_lookup_ignores_case() -> TestResult {
        let catalog = Catalog::default();

        assert_eq!(catalog.item("gingelly")?, "Gingelly");
        assert_eq!(catalog.item(" COCONUT ")?, "Coconut");

        Ok(())
    }

    #[test]
    fn item_lookup_rejects_unknown_items() {
        let catalog = Catalog::default();
        let result = catalog.item("Sunflower");

        assert!(matches!(result, Err(CatalogError::UnknownItem(name)) if name == "Sunflower"));
    }

    #[test]
    fn yaml_overrides_only_given_fields() -> TestResult {
        let catalog = Catalog::from_yaml_str(
            "rate_per_kg: \"42.50 INR\"\nitems: [Castor, Mustard]\n",
        )?;

        assert_eq!(*catalog.rate_per_kg().amount(), Decimal::new(4250, 2));
        assert_eq!(catalog.items(), ["Castor", "Mustard"]);
        assert_eq!(catalog.seller(), &SellerIdentity::default());
        assert_eq!(catalog.output_file(), OUTPUT_FILE);

        Ok(())
    }

    #[test]
    fn empty_yaml_gives_defaults() -> TestResult {
        let catalog = Catalog::from_yaml_str("")?;

        assert_eq!(catalog.items().len(), 3);

        Ok(())
    }

    #[test]
    fn yaml_rejects_unknown_fields() {
        let result = Catalog::from_yaml_str("discount: 10\n");

        assert!(matches!(result, Err(CatalogError::Yaml(_))));
    }

    #[test]
    fn yaml_rejects_empty_item_list() {
        let result = Catalog::from_yaml_str("items: []\n");

        assert!(matches!(result, Err(CatalogError::NoItems)));
    }

    #[test]
    fn yaml_rejects_blank_output_file() {
        let result = Catalog::from_yaml_str("output_file: \"  \"\n");

        assert!(matches!(result, Err(CatalogError::EmptyOutputFile)));
    }

    #[test]
    fn parse_rate_rejects_invalid_format() {
        let result = parse_rate("35INR");

        assert!(matches!(result, Err(CatalogError::InvalidRate(_))));
    }

    #[test]
    fn parse_rate_rejects_fractions_of_a_paisa() -> TestResult {
        let result = parse_rate("35.125 INR");

        assert!(matches!(result, Err(CatalogError::InvalidRate(_))));
        assert_eq!(*parse_rate("35.10 INR")?.amount(), Decimal::new(3510, 2));

        Ok(())
    }

    #[test]
    fn parse_rate_rejects_other_currencies() {
        let result = parse_rate("35 GBP");

        assert!(matches!(result, Err(CatalogError::UnknownCurrency(code)) if code == "GBP"));
    }

    #[test]
    fn parse_rate_rejects_negative_amounts() {
        let result = parse_rate("-1 INR");

        assert!(matches!(result, Err(CatalogError::NegativeRate(_))));
    }

    #[test]
    fn catalog_loads_from_file() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("catalog.yml");

        fs::write(
            &path,
            "seller:\n  name: Test Mill\n  address: 1, Main Road\noutput_file: bill.pdf\n",
        )?;

        let catalog = Catalog::from_path(&path)?;

        assert_eq!(catalog.seller().name, "Test Mill");
        assert_eq!(catalog.output_file(), "bill.pdf");

        Ok(())
    }
}
