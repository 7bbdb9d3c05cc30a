//! File-backed key-value store.
//!
//! The whole key space lives in a single JSON object on disk, mirroring a
//! browser's local storage: string keys, string values.
//!
//! File location: `<data dir>/tandem/storage.json` by default.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tandem_core::error::Result;
use tandem_core::storage::KeyValueStore;

use super::atomic_file::{AtomicFile, FileFormat};

type Entries = BTreeMap<String, String>;

/// Key-value store persisted to one JSON file.
///
/// Reads go to disk every time, so values written by another process are
/// picked up. Writes are a locked read-modify-write followed by an atomic
/// rename; the last writer wins.
pub struct JsonFileStore {
    file: AtomicFile<Entries>,
}

impl JsonFileStore {
    /// Creates a store over `path`. The file is created on first write.
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicFile::new(path, FileFormat::Json),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    fn entries(&self) -> Result<Entries> {
        Ok(self.file.load()?.unwrap_or_default())
    }

    /// All stored keys, sorted.
    pub fn keys(&self) -> Result<Vec<String>> {
        Ok(self.entries()?.into_keys().collect())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.file.update(Entries::new(), |entries| {
            entries.insert(key.to_string(), value.to_string());
            Ok(())
        })?;
        tracing::debug!(key, bytes = value.len(), path = ?self.path(), "Stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        if !self.path().exists() {
            return Ok(());
        }
        self.file.update(Entries::new(), |entries| {
            entries.remove(key);
            Ok(())
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_from_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("storage.json"));

        assert_eq!(store.get("user").unwrap(), None);
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn test_set_get_remove() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("storage.json"));

        store.set("user", r#"{"email":"a@b.c"}"#).unwrap();
        store.set("pastSessions", "[]").unwrap();
        store.set("user", r#"{"email":"d@e.f"}"#).unwrap();

        assert_eq!(store.get("user").unwrap().as_deref(), Some(r#"{"email":"d@e.f"}"#));
        assert_eq!(store.keys().unwrap(), vec!["pastSessions", "user"]);

        store.remove("user").unwrap();
        assert_eq!(store.get("user").unwrap(), None);
        assert_eq!(store.get("pastSessions").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_remove_without_file_does_not_create_it() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        let store = JsonFileStore::new(path.clone());

        store.remove("user").unwrap();

        assert!(!path.exists());
    }

    #[test]
    fn test_values_survive_new_handle() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        JsonFileStore::new(path.clone()).set("conversations", "{}").unwrap();

        let reopened = JsonFileStore::new(path);
        assert_eq!(reopened.get("conversations").unwrap().as_deref(), Some("{}"));
    }
}
