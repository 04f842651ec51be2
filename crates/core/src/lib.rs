//! `stockpile-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! validated item names, quantity coercion at the input boundary, and the typed
//! error model shared by every inventory operation.

pub mod error;
pub mod item;
pub mod quantity;

pub use error::{StockError, StockResult};
pub use item::ItemName;
pub use quantity::QuantityInput;
