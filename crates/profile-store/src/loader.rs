//! Dataset loader: build a `MemoryStore` from a JSON export.
//!
//! The expected format is a JSON array of user records, one object per
//! user, as produced by exporting the `users` collection:
//!
//! ```json
//! [
//!   { "id": "u1", "age": 24, "interests": ["hiking", "jazz"] },
//!   { "id": "u2", "age": 31, "interests": ["tennis"] }
//! ]
//! ```
//!
//! Buckets are derived while inserting, so a loaded store is immediately
//! queryable; no separate index-build step exists.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::info;

use crate::error::{Result, StoreError};
use crate::store::MemoryStore;
use crate::types::UserRecord;

/// Load a user dataset from a JSON file into a `MemoryStore`.
///
/// # Arguments
/// * `path` - Path to a JSON array of user records
///
/// # Returns
/// * `Ok(MemoryStore)` - Fully indexed store
/// * `Err(StoreError)` - I/O failure, malformed JSON, a duplicate id,
///   or an interest tag containing the reserved delimiter
pub fn load_from_file(path: &Path) -> Result<MemoryStore> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let records: Vec<UserRecord> =
        serde_json::from_reader(reader).map_err(|source| StoreError::Malformed {
            path: path.display().to_string(),
            source,
        })?;

    let mut store = MemoryStore::new();
    for record in records {
        store.insert_user(record)?;
    }

    let (users, buckets) = store.counts();
    info!("loaded {} users into {} buckets from {}", users, buckets, path.display());

    Ok(store)
}
