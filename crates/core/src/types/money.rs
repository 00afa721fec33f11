//! Monetary amounts with currency, backed by decimal arithmetic.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error parsing a monetary amount from its wire representation.
#[derive(Debug, Error)]
pub enum MoneyParseError {
    #[error("invalid decimal amount {amount:?}: {source}")]
    InvalidAmount {
        amount: String,
        source: rust_decimal::Error,
    },
}

/// ISO 4217 currency code newtype.
///
/// Codes arrive from the commerce API as arbitrary strings; a newtype keeps
/// them from being confused with handles or other identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Currency symbol for display, if the code has a conventional one.
    #[must_use]
    pub fn symbol(&self) -> Option<&'static str> {
        match self.0.as_str() {
            "USD" | "CAD" | "AUD" | "NZD" => Some("$"),
            "EUR" => Some("\u{20ac}"),
            "GBP" => Some("\u{a3}"),
            "JPY" => Some("\u{a5}"),
            _ => None,
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        Self(code.to_owned())
    }
}

/// Monetary amount with currency code.
///
/// The amount is kept as a `Decimal` (never a float) to preserve precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the currency's standard unit (dollars, not cents).
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Money {
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Parse a money value from its wire representation (decimal string +
    /// currency code string).
    ///
    /// # Errors
    ///
    /// Returns `MoneyParseError` if the amount is not a valid decimal.
    pub fn parse(amount: &str, currency_code: &str) -> Result<Self, MoneyParseError> {
        let parsed = Decimal::from_str(amount).map_err(|source| MoneyParseError::InvalidAmount {
            amount: amount.to_owned(),
            source,
        })?;
        Ok(Self::new(parsed, CurrencyCode::from(currency_code)))
    }
}

impl fmt::Display for Money {
    /// Renders `"$15.00"` for currencies with a conventional symbol, and
    /// `"15.00 XYZ"` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.currency_code.symbol() {
            Some(symbol) => write!(f, "{symbol}{:.2}", self.amount),
            None => write!(f, "{:.2} {}", self.amount, self.currency_code),
        }
    }
}
