//! Quantity coercion at the input boundary.
//!
//! Callers may supply quantities as integers or as text (`"7"`). All external
//! input passes through [`QuantityInput::coerce`] exactly once, before any
//! mutation of the stock mapping; core logic only ever sees validated `i64`s.

use crate::error::{StockError, StockResult};

/// A quantity as supplied by a caller, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityInput {
    Integer(i64),
    Text(String),
}

impl QuantityInput {
    /// Coerce the input to a signed integer.
    ///
    /// Text is trimmed and parsed as base-10; anything that does not parse is
    /// an [`StockError::InvalidQuantity`]. The sign is preserved so callers
    /// can interpret negative adds as removals.
    pub fn coerce(&self) -> StockResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Text(raw) => raw.trim().parse::<i64>().map_err(|err| {
                StockError::invalid_quantity(format!("'{raw}' is not an integer: {err}"))
            }),
        }
    }
}

impl From<i64> for QuantityInput {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for QuantityInput {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u32> for QuantityInput {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<&str> for QuantityInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for QuantityInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
