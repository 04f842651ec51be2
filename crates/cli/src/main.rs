//! Demo binary: a full inventory session end to end.
//!
//! Loads the snapshot, runs a scripted set of operations (including the
//! rejected ones, to show the logging contract), prints the report, and
//! persists the result. Log lines go to stderr; the report goes to stdout.

use std::path::PathBuf;

use anyhow::Context;

use stockpile_store::{DEFAULT_LOW_STOCK_THRESHOLD, InventoryStore};

const DEFAULT_INVENTORY_FILE: &str = "inventory.json";

fn main() -> anyhow::Result<()> {
    stockpile_observability::init();

    let path = snapshot_path()?;
    let threshold = low_stock_threshold();

    println!("--- Inventory System Initializing ---");

    let mut store = InventoryStore::new();
    store.load(&path);

    println!("\n--- Starting Inventory Operations ---");

    let _ = store.add("apple", 10);
    let _ = store.add("banana", 8);
    let _ = store.add("orange", 5);
    let _ = store.add("grape", "7");

    let _ = store.remove("apple", 3);
    let _ = store.add("banana", -2); // removes 2 bananas

    // Error cases: each is logged and rejected without touching stock.
    let _ = store.add("", 10);
    let _ = store.add("pear", "ten");
    let _ = store.remove("kiwi", 1);
    let _ = store.remove("orange", 10); // more than in stock: clamps to 0

    println!("\n--- Reporting ---");
    println!("Apple stock: {}", store.quantity("apple"));
    println!("Banana stock: {}", store.quantity("banana"));
    let low = store.low_stock(threshold);
    let low: Vec<&str> = low.iter().map(|n| n.as_str()).collect();
    println!("Low items (threshold {threshold}): {low:?}");

    let _ = store.save(&path);

    // Demonstrate persistence: reload into a fresh store and report.
    let mut reloaded = InventoryStore::new();
    reloaded.load(&path);
    reloaded.report();

    Ok(())
}

/// Snapshot location: `STOCKPILE_FILE`, else `inventory.json` in the working
/// directory.
fn snapshot_path() -> anyhow::Result<PathBuf> {
    if let Ok(path) = std::env::var("STOCKPILE_FILE") {
        return Ok(PathBuf::from(path));
    }
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    Ok(cwd.join(DEFAULT_INVENTORY_FILE))
}

/// Low-stock threshold: `STOCKPILE_LOW_STOCK`, else the conventional default.
fn low_stock_threshold() -> u64 {
    match std::env::var("STOCKPILE_LOW_STOCK") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "STOCKPILE_LOW_STOCK is not an integer: '{raw}', using default {DEFAULT_LOW_STOCK_THRESHOLD}"
            );
            DEFAULT_LOW_STOCK_THRESHOLD
        }),
        Err(_) => DEFAULT_LOW_STOCK_THRESHOLD,
    }
}
