//! The Inventory Store: one mapping, its mutations and queries.

use std::collections::HashMap;
use std::path::Path;

use stockpile_core::{ItemName, QuantityInput, StockError, StockResult};

use crate::{report, snapshot};

/// Conventional cutoff for [`InventoryStore::low_stock`].
pub const DEFAULT_LOW_STOCK_THRESHOLD: u64 = 5;

/// Result of a [`InventoryStore::load`] call.
///
/// `load` never fails: a missing or unreadable snapshot leaves the store
/// empty and valid, and the outcome says which case occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Snapshot read successfully; carries the number of items loaded.
    Loaded(usize),
    /// No snapshot file at the given path; starting with an empty mapping.
    Missing,
    /// Snapshot was corrupt or unreadable; its contents were discarded.
    Discarded,
}

/// Result of a successful [`InventoryStore::remove`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removal {
    /// Quantity the caller asked to remove.
    pub requested: u64,
    /// Quantity actually removed (never more than was on hand).
    pub removed: u64,
    /// Quantity still on hand afterwards.
    pub remaining: u64,
}

impl Removal {
    /// Whether the request was cut down to the available stock.
    pub fn clamped(&self) -> bool {
        self.removed < self.requested
    }
}

/// The single authoritative item → quantity table.
///
/// Invariant: no key maps to 0. An item whose quantity reaches 0 is deleted
/// from the mapping, so absence and "quantity 0" are the same observable
/// state. All quantities are non-negative by construction (`u64`).
///
/// The store is an owned value passed by reference to each operation; create
/// as many independent inventories as you need (tests rely on this).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryStore {
    stock: HashMap<ItemName, u64>,
}

impl InventoryStore {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the mapping with the snapshot at `path`.
    ///
    /// Never fails and never panics: a missing file logs at info and leaves
    /// the store empty; corrupt JSON or any other I/O failure logs at error
    /// and likewise leaves the store empty. Explicit zero entries in the file
    /// are dropped during replacement (absence ⇔ quantity 0).
    pub fn load(&mut self, path: impl AsRef<Path>) -> LoadOutcome {
        let path = path.as_ref();
        match snapshot::read(path) {
            Ok(Some(mut stock)) => {
                stock.retain(|_, qty| *qty > 0);
                let items = stock.len();
                self.stock = stock;
                tracing::info!("successfully loaded {items} item(s) from {}", path.display());
                LoadOutcome::Loaded(items)
            }
            Ok(None) => {
                self.stock.clear();
                tracing::info!(
                    "inventory file '{}' not found, starting new inventory",
                    path.display()
                );
                LoadOutcome::Missing
            }
            Err(err) => {
                self.stock.clear();
                tracing::error!(
                    "failed to load inventory from '{}': {err}; starting new inventory",
                    path.display()
                );
                LoadOutcome::Discarded
            }
        }
    }

    /// Write the current mapping to `path` as pretty-printed JSON.
    ///
    /// On failure the in-memory mapping is untouched; the error is logged and
    /// also returned as [`StockError::Snapshot`] for callers that want to
    /// react. Nothing panics.
    pub fn save(&self, path: impl AsRef<Path>) -> StockResult<()> {
        let path = path.as_ref();
        match snapshot::write(path, &self.stock) {
            Ok(()) => {
                tracing::info!(
                    "successfully saved {} item(s) to {}",
                    self.stock.len(),
                    path.display()
                );
                Ok(())
            }
            Err(err) => {
                tracing::error!("failed to save inventory to '{}': {err}", path.display());
                Err(err.into())
            }
        }
    }

    /// Add `qty` of `item` to the stock.
    ///
    /// A negative quantity delegates to [`remove`](Self::remove) with the
    /// absolute value; zero is a logged no-op. Returns the quantity on hand
    /// after the operation.
    pub fn add(&mut self, item: &str, qty: impl Into<QuantityInput>) -> StockResult<u64> {
        let name = match ItemName::new(item) {
            Ok(name) => name,
            Err(err) => {
                tracing::warn!("invalid item name, skipping add: {err}");
                return Err(err);
            }
        };
        let delta = match qty.into().coerce() {
            Ok(delta) => delta,
            Err(err) => {
                tracing::error!("invalid quantity for '{name}', skipping add: {err}");
                return Err(err);
            }
        };

        if delta < 0 {
            let requested = delta.unsigned_abs();
            tracing::info!("negative quantity for {name}, delegating to remove: {requested}");
            return self.remove_stock(&name, requested).map(|r| r.remaining);
        }
        if delta == 0 {
            tracing::debug!("attempted to add 0 of {name}");
            return Ok(self.quantity(name.as_str()));
        }

        let delta = delta as u64;
        let current = self.stock.get(&name).copied().unwrap_or(0);
        let Some(total) = current.checked_add(delta) else {
            tracing::error!("quantity overflow for '{name}', skipping add");
            return Err(StockError::invalid_quantity(format!(
                "adding {delta} to {current} overflows"
            )));
        };
        self.stock.insert(name.clone(), total);
        tracing::info!("added {delta} of {name}, new stock: {total}");
        Ok(total)
    }

    /// Remove `qty` of `item` from the stock.
    ///
    /// The request must be strictly positive. Removing more than is on hand
    /// clamps to the available amount (warned, not an error); quantity never
    /// goes negative. Removing from an absent item is a logged no-op that
    /// returns [`StockError::NotFound`].
    pub fn remove(&mut self, item: &str, qty: impl Into<QuantityInput>) -> StockResult<Removal> {
        let name = match ItemName::new(item) {
            Ok(name) => name,
            Err(err) => {
                tracing::warn!("invalid item name, skipping remove: {err}");
                return Err(err);
            }
        };
        let requested = match qty.into().coerce() {
            Ok(requested) => requested,
            Err(err) => {
                tracing::error!("invalid quantity for '{name}', skipping remove: {err}");
                return Err(err);
            }
        };
        if requested <= 0 {
            tracing::warn!("remove called with non-positive quantity: {requested}, ignoring");
            return Err(StockError::validation(
                "removal quantity must be strictly positive",
            ));
        }
        self.remove_stock(&name, requested as u64)
    }

    fn remove_stock(&mut self, name: &ItemName, requested: u64) -> StockResult<Removal> {
        let Some(current) = self.stock.get(name).copied() else {
            tracing::error!("item '{name}' not found in inventory, cannot remove");
            return Err(StockError::not_found(name.as_str()));
        };

        let removed = requested.min(current);
        if removed < requested {
            tracing::warn!("only {current} of {name} in stock, removing all available ({removed})");
        }

        let remaining = current - removed;
        if remaining == 0 {
            self.stock.remove(name);
            tracing::info!("removed {name} from inventory, stock depleted");
        } else {
            self.stock.insert(name.clone(), remaining);
            tracing::info!("removed {removed} of {name}, remaining stock: {remaining}");
        }

        Ok(Removal {
            requested,
            removed,
            remaining,
        })
    }

    /// Quantity on hand for `item`; 0 for absent items. Total function,
    /// never fails, never logs.
    pub fn quantity(&self, item: &str) -> u64 {
        self.stock.get(item).copied().unwrap_or(0)
    }

    /// Every item with quantity strictly below `threshold`, in the mapping's
    /// natural (unordered) enumeration order. Pure query.
    pub fn low_stock(&self, threshold: u64) -> Vec<ItemName> {
        self.stock
            .iter()
            .filter(|&(_, &qty)| qty < threshold)
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Print the sorted inventory report to stdout.
    pub fn report(&self) {
        print!("{}", report::render(self));
    }

    /// Number of distinct items on hand.
    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// Read-only view of the mapping.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, u64)> {
        self.stock.iter().map(|(name, &qty)| (name, qty))
    }
}
