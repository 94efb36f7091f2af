use super::KvStore;
use crate::error::{Result, TodzError};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed blob store: one `<key>.json` file per key under `root`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TodzError::Io)?;
        }
        Ok(())
    }
}

impl KvStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let blob = fs::read_to_string(path).map_err(TodzError::Io)?;
        Ok(Some(blob))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_root()?;
        fs::write(self.key_path(key), value).map_err(TodzError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items;
    use crate::store::{load_items, save_items, ITEMS_KEY};

    #[test]
    fn read_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.read(ITEMS_KEY).unwrap().is_none());
    }

    #[test]
    fn write_creates_the_root_dir() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("todz");
        let mut store = FileStore::new(&root);
        store.write(ITEMS_KEY, "[]").unwrap();
        assert!(root.join("items.json").exists());
    }

    #[test]
    fn items_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        let saved = items::add(&items::add(&[], "persist me"), "me too");
        save_items(&mut store, &saved);

        // A fresh store over the same root sees the same collection.
        let reopened = FileStore::new(dir.path());
        let outcome = load_items(&reopened);
        assert!(!outcome.defaulted);
        assert_eq!(outcome.items, saved);
    }

    #[test]
    fn garbage_on_disk_defaults_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("items.json"), "{{{{").unwrap();

        let store = FileStore::new(dir.path());
        let outcome = load_items(&store);
        assert!(outcome.items.is_empty());
        assert!(outcome.defaulted);
    }
}
