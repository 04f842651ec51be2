//! Black-box tests against the public store API: the full demo flow plus the
//! persistence behaviors that only show up with a real filesystem underneath.

use stockpile_store::{
    DEFAULT_LOW_STOCK_THRESHOLD, InventoryStore, LoadOutcome, StockError, report,
};

#[test]
fn full_session_walkthrough() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");

    let mut store = InventoryStore::new();
    assert_eq!(store.load(&path), LoadOutcome::Missing);

    store.add("apple", 10).unwrap();
    store.add("banana", 8).unwrap();
    store.add("orange", 5).unwrap();
    store.add("grape", "7").unwrap();

    store.remove("apple", 3).unwrap();
    store.add("banana", -2).unwrap(); // removes 2 bananas

    // Error cases: rejected and logged, never mutating.
    assert!(matches!(store.add("", 10), Err(StockError::Validation(_))));
    assert!(matches!(
        store.add("pear", "ten"),
        Err(StockError::InvalidQuantity(_))
    ));
    assert!(matches!(
        store.remove("kiwi", 1),
        Err(StockError::NotFound(_))
    ));

    // Removing more than available clamps to zero and deletes the entry.
    let removal = store.remove("orange", 10).unwrap();
    assert!(removal.clamped());
    assert_eq!(removal.removed, 5);

    assert_eq!(store.quantity("apple"), 7);
    assert_eq!(store.quantity("banana"), 6);
    assert_eq!(store.quantity("orange"), 0);

    let mut low: Vec<String> = store
        .low_stock(DEFAULT_LOW_STOCK_THRESHOLD)
        .into_iter()
        .map(String::from)
        .collect();
    low.sort();
    assert!(low.is_empty(), "nothing is below 5: {low:?}");

    store.save(&path).unwrap();

    // Reload into a fresh store: key set and values identical.
    let mut reloaded = InventoryStore::new();
    assert_eq!(reloaded.load(&path), LoadOutcome::Loaded(3));
    assert_eq!(reloaded, store);

    let expected = "\n\
        --- Items Report ---\n\
        apple  -> 7\n\
        banana -> 6\n\
        grape  -> 7\n\
        --------------------\n";
    assert_eq!(report::render(&reloaded), expected);
}

#[test]
fn save_then_load_round_trips_exactly() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");

    let mut store = InventoryStore::new();
    store.add("apple", 7).unwrap();
    store.add("banana", 6).unwrap();
    store.save(&path).unwrap();

    let mut reloaded = InventoryStore::new();
    assert_eq!(reloaded.load(&path), LoadOutcome::Loaded(2));
    assert_eq!(reloaded, store);

    // The on-disk shape is the documented format.
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "{\n    \"apple\": 7,\n    \"banana\": 6\n}");
}

#[test]
fn loading_a_corrupt_file_discards_and_starts_empty() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");
    std::fs::write(&path, "this is not json").unwrap();

    let mut store = InventoryStore::new();
    store.add("carryover", 3).unwrap();

    assert_eq!(store.load(&path), LoadOutcome::Discarded);
    assert!(store.is_empty());
}

#[test]
fn loading_replaces_prior_contents_wholesale() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");

    let mut saved = InventoryStore::new();
    saved.add("apple", 4).unwrap();
    saved.save(&path).unwrap();

    let mut store = InventoryStore::new();
    store.add("stale", 99).unwrap();
    assert_eq!(store.load(&path), LoadOutcome::Loaded(1));
    assert_eq!(store.quantity("stale"), 0);
    assert_eq!(store.quantity("apple"), 4);
}

#[test]
fn loading_drops_explicit_zero_entries() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");
    std::fs::write(&path, "{\n    \"apple\": 7,\n    \"ghost\": 0\n}").unwrap();

    let mut store = InventoryStore::new();
    assert_eq!(store.load(&path), LoadOutcome::Loaded(1));
    assert_eq!(store.quantity("apple"), 7);
    assert_eq!(store.quantity("ghost"), 0);
    assert_eq!(store.len(), 1);
}

#[test]
fn save_failure_reports_and_leaves_state_untouched() {
    let dir = tempfile::TempDir::new().unwrap();
    // A directory path cannot be created as a file.
    let path = dir.path().join("as-directory");
    std::fs::create_dir(&path).unwrap();

    let mut store = InventoryStore::new();
    store.add("apple", 7).unwrap();

    let result = store.save(&path);
    assert!(matches!(result, Err(StockError::Snapshot(_))));
    assert_eq!(store.quantity("apple"), 7);
}

#[test]
fn two_stores_are_fully_independent() {
    let mut pantry = InventoryStore::new();
    let mut warehouse = InventoryStore::new();

    pantry.add("apple", 3).unwrap();
    warehouse.add("apple", 1000).unwrap();
    warehouse.remove("apple", 250).unwrap();

    assert_eq!(pantry.quantity("apple"), 3);
    assert_eq!(warehouse.quantity("apple"), 750);
}
