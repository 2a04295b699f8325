//! Capacity-bounded, persisted list of tree parameter sets
//!
//! Entries are identified only by their insertion index. The list is loaded
//! once at construction and written through on every mutation; storage
//! failures are logged and never interrupt the session.

use crate::gallery::storage::StorageBackend;
use crate::geometry::params::TreeParameters;
use crate::io::error::Result;
use tracing::{debug, info, warn};

/// Ordered gallery of saved trees backed by a [`StorageBackend`]
#[derive(Debug)]
pub struct GalleryStore<B: StorageBackend> {
    backend: B,
    key: String,
    capacity: usize,
    entries: Vec<TreeParameters>,
}

impl<B: StorageBackend> GalleryStore<B> {
    /// Load the gallery stored under `key`
    ///
    /// Missing or unreadable data yields an empty gallery. Stored lists longer
    /// than `capacity` keep only their first `capacity` entries.
    pub fn load(backend: B, key: impl Into<String>, capacity: usize) -> Self {
        let key = key.into();
        let mut entries = match backend.get_item(&key) {
            Ok(Some(raw)) => decode_entries(&raw).unwrap_or_else(|err| {
                warn!(key = %key, error = %err, "ignoring corrupt gallery data");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(key = %key, error = %err, "gallery storage unreadable");
                Vec::new()
            }
        };

        if entries.len() > capacity {
            warn!(
                stored = entries.len(),
                capacity, "stored gallery exceeds capacity, truncating"
            );
            entries.truncate(capacity);
        }

        debug!(key = %key, entries = entries.len(), capacity, "gallery loaded");

        Self {
            backend,
            key,
            capacity,
            entries,
        }
    }

    /// Append a tree if a cell is free
    ///
    /// Returns `false` and leaves the gallery untouched when it is full.
    pub fn append(&mut self, params: TreeParameters) -> bool {
        if self.is_full() {
            info!(capacity = self.capacity, "gallery full, submission dropped");
            return false;
        }

        self.entries.push(params);
        self.persist();
        true
    }

    /// Remove every entry and the stored key
    pub fn clear(&mut self) {
        self.entries.clear();
        if let Err(err) = self.backend.remove_item(&self.key) {
            warn!(key = %self.key, error = %err, "failed to remove stored gallery");
        }
    }

    /// Entries in insertion order
    pub fn list(&self) -> &[TreeParameters] {
        &self.entries
    }

    /// Entry at `index`
    pub fn get(&self, index: usize) -> Option<&TreeParameters> {
        self.entries.get(index)
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether another append would be rejected
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Free cells left
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.entries.len())
    }

    /// Storage key this gallery persists under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the storage backend
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    // The in-memory list stays authoritative for this session if the write fails
    fn persist(&mut self) {
        let result =
            encode_entries(&self.entries).and_then(|raw| self.backend.set_item(&self.key, &raw));
        if let Err(err) = result {
            warn!(key = %self.key, error = %err, "failed to persist gallery");
        }
    }
}

/// Parse a stored JSON array of parameter records
///
/// Elements that are not valid records (`null`, missing fields, wrong types)
/// are skipped one by one, so a single bad entry never costs the others.
///
/// # Errors
///
/// Returns an error if `raw` is not a JSON array
pub fn decode_entries(raw: &str) -> Result<Vec<TreeParameters>> {
    let elements: Vec<serde_json::Value> = serde_json::from_str(raw)?;

    Ok(elements
        .into_iter()
        .enumerate()
        .filter_map(
            |(index, element)| match serde_json::from_value::<TreeParameters>(element) {
                Ok(params) => Some(params),
                Err(err) => {
                    warn!(index, error = %err, "skipping unreadable gallery entry");
                    None
                }
            },
        )
        .collect())
}

/// Serialize parameter records as a JSON array
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn encode_entries(entries: &[TreeParameters]) -> Result<String> {
    Ok(serde_json::to_string(entries)?)
}
