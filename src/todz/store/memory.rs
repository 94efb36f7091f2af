use super::KvStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    blobs: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for InMemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::TodzError;
    use crate::store::{save_items, ITEMS_KEY};
    use crate::{items, model::Item};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_items(mut self, texts: &[&str]) -> Self {
            let mut collection: Vec<Item> = Vec::new();
            for text in texts {
                collection = items::add(&collection, text);
            }
            save_items(&mut self.store, &collection);
            self
        }

        pub fn with_raw_blob(mut self, blob: &str) -> Self {
            self.store.write(ITEMS_KEY, blob).unwrap();
            self
        }
    }

    /// Store whose writes always fail, for exercising the save path.
    #[derive(Default)]
    pub struct FailingStore {
        pub attempted_writes: usize,
    }

    impl KvStore for FailingStore {
        fn read(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<()> {
            self.attempted_writes += 1;
            Err(TodzError::Store("write refused".to_string()))
        }
    }
}
