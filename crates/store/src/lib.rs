//! `stockpile-store` — the Inventory Store.
//!
//! One struct, [`InventoryStore`], owns the stock mapping (item name →
//! quantity) and exposes the mutate/query operations, whole-mapping snapshot
//! persistence, and the console report. Every operation both logs through
//! `tracing` and returns a typed status, so callers and tests can assert on
//! outcomes without parsing log text.

pub mod report;
pub mod snapshot;
pub mod store;

pub use snapshot::SnapshotError;
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, InventoryStore, LoadOutcome, Removal};

pub use stockpile_core::{ItemName, QuantityInput, StockError, StockResult};
