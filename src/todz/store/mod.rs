//! # Storage Layer
//!
//! The [`KvStore`] trait is a string-blob key-value store: the smallest
//! surface the persistence model needs. The whole collection is one JSON
//! blob under a single key, rewritten in full on every mutation — there is
//! no partial persistence and no transaction log.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one `<key>.json` file per key
//!   under a root directory.
//! - [`memory::InMemoryStore`]: in-memory storage for testing. Holds raw
//!   blobs, so malformed-data paths are testable too.
//!
//! ## The persistence adapter
//!
//! [`load_items`] and [`save_items`] sit on top of the trait and own the
//! `"items"` key. Loading is lenient: an absent, unreadable, or malformed
//! blob yields an empty collection and a `defaulted` marker, never an
//! error. Saving never surfaces failure to the caller; it logs and retries
//! once.

use crate::error::Result;
use crate::model::Item;

pub mod fs;
pub mod memory;

/// The single key the item collection lives under.
pub const ITEMS_KEY: &str = "items";

/// Abstract interface for blob storage.
pub trait KvStore {
    /// Read the blob stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any prior value.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Result of loading the collection at startup.
#[derive(Debug)]
pub struct LoadOutcome {
    pub items: Vec<Item>,
    /// True when the store held nothing usable and we started empty.
    pub defaulted: bool,
}

/// Load the collection from the `"items"` blob. Total: any failure mode
/// degrades to an empty collection with `defaulted` set.
pub fn load_items<S: KvStore>(store: &S) -> LoadOutcome {
    let blob = match store.read(ITEMS_KEY) {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            return LoadOutcome {
                items: Vec::new(),
                defaulted: true,
            }
        }
        Err(e) => {
            log::warn!("failed to read item store, starting empty: {}", e);
            return LoadOutcome {
                items: Vec::new(),
                defaulted: true,
            };
        }
    };

    match serde_json::from_str(&blob) {
        Ok(items) => LoadOutcome {
            items,
            defaulted: false,
        },
        Err(e) => {
            log::warn!("malformed item store, starting empty: {}", e);
            LoadOutcome {
                items: Vec::new(),
                defaulted: true,
            }
        }
    }
}

/// Serialize the full collection and write it under `"items"`. Failures
/// are logged, retried once, and never reach the caller.
pub fn save_items<S: KvStore>(store: &mut S, items: &[Item]) {
    let blob = match serde_json::to_string(items) {
        Ok(blob) => blob,
        Err(e) => {
            log::error!("failed to serialize items, nothing written: {}", e);
            return;
        }
    };

    if let Err(first) = store.write(ITEMS_KEY, &blob) {
        log::warn!("failed to write item store, retrying: {}", first);
        if let Err(second) = store.write(ITEMS_KEY, &blob) {
            log::error!("failed to write item store, giving up: {}", second);
        }
    }
}
