//! Domain error model.

use thiserror::Error;

/// Result type used across the inventory domain.
pub type StockResult<T> = Result<T, StockError>;

/// Inventory-level error.
///
/// Every public operation reports failures through this type in addition to
/// logging them; nothing in the domain layer panics or raises past the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    /// A value failed validation (empty item name, non-positive removal request).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A quantity could not be coerced to an integer, or arithmetic overflowed.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// A removal targeted an item absent from the stock mapping.
    #[error("item not found: {0}")]
    NotFound(String),

    /// Snapshot persistence failed (the in-memory mapping is unaffected).
    #[error("snapshot failure: {0}")]
    Snapshot(String),
}

impl StockError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_quantity(msg: impl Into<String>) -> Self {
        Self::InvalidQuantity(msg.into())
    }

    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }

    pub fn snapshot(msg: impl Into<String>) -> Self {
        Self::Snapshot(msg.into())
    }
}
