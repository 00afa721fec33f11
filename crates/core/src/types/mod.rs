//! Shared type definitions.

mod money;

pub use money::{CurrencyCode, Money, MoneyParseError};
