//! Console report rendering.

use std::fmt::Write;

use crate::store::InventoryStore;

const HEADER: &str = "--- Items Report ---";
const FOOTER: &str = "--------------------";

/// Render the inventory report.
///
/// Items are sorted lexicographically by name and column-aligned to the
/// longest name; an empty inventory renders a single notice instead. Kept as
/// a pure function so tests can assert the exact text without capturing
/// stdout ([`InventoryStore::report`] is the thin printing wrapper).
pub fn render(store: &InventoryStore) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(HEADER);
    out.push('\n');

    if store.is_empty() {
        out.push_str("Inventory is empty.\n");
        return out;
    }

    let mut items: Vec<_> = store.iter().collect();
    items.sort_by(|a, b| a.0.cmp(b.0));
    let width = items
        .iter()
        .map(|(name, _)| name.as_str().len())
        .max()
        .unwrap_or(0);

    for (name, qty) in items {
        // Infallible for String targets.
        let _ = writeln!(out, "{:<width$} -> {qty}", name.as_str());
    }
    out.push_str(FOOTER);
    out.push('\n');
    out
}
