//! Snapshot persistence: whole-mapping JSON dump/load.
//!
//! The persisted format is a single UTF-8 JSON object of item name →
//! non-negative integer, pretty-printed with 4-space indentation and sorted
//! keys so saved files are stable and diffable. There are no incremental or
//! transactional semantics; `write` overwrites the whole file.

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use thiserror::Error;

use stockpile_core::{ItemName, StockError};

/// Failure at the persistence edge.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<SnapshotError> for StockError {
    fn from(err: SnapshotError) -> Self {
        StockError::snapshot(err.to_string())
    }
}

/// Read a snapshot file into a fresh stock mapping.
///
/// Returns `Ok(None)` when the file does not exist (a missing snapshot is not
/// an error). Invalid JSON, empty keys, and fractional or negative values all
/// fail as [`SnapshotError::Parse`].
pub fn read(path: &Path) -> Result<Option<HashMap<ItemName, u64>>, SnapshotError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    let stock = serde_json::from_reader(BufReader::new(file))?;
    Ok(Some(stock))
}

/// Overwrite `path` with the serialized mapping.
///
/// The file handle is scoped to this call and released on every exit path.
pub fn write(path: &Path, stock: &HashMap<ItemName, u64>) -> Result<(), SnapshotError> {
    // BTreeMap iteration order gives sorted keys in the output.
    let ordered: BTreeMap<&ItemName, u64> = stock.iter().map(|(name, &qty)| (name, qty)).collect();

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    serde::Serialize::serialize(&ordered, &mut serializer)?;
    writer.flush()?;
    Ok(())
}
