//! # Session Storage
//!
//! Client-side key/value storage for the login marker.
//!
//! The marker is a presence flag only: no token, no expiry, nothing the
//! server checks. [`FileStorage`] keeps it in a small JSON object on disk so
//! it survives between runs; [`MemoryStorage`] is for tests and one-shot use.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// Key/value storage for client session state.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> ClientResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> ClientResult<()>;

    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> ClientResult<()>;
}

// =============================================================================
// File Storage
// =============================================================================

/// A JSON object on disk, e.g. `{"user": "jane@example.com"}`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStorage { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> ClientResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| ClientError::Session(e.to_string()))?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents).map_err(|e| ClientError::Session(e.to_string()))
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ClientError::Session(e.to_string()))?;
        }

        let contents =
            serde_json::to_string_pretty(entries).map_err(|e| ClientError::Session(e.to_string()))?;
        std::fs::write(&self.path, contents).map_err(|e| ClientError::Session(e.to_string()))
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> ClientResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> ClientResult<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)?;
        debug!(path = ?self.path, key, "Session entry stored");
        Ok(())
    }

    fn remove(&self, key: &str) -> ClientResult<()> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
            debug!(path = ?self.path, key, "Session entry removed");
        }
        Ok(())
    }
}

// =============================================================================
// Memory Storage
// =============================================================================

/// In-process storage; forgotten when dropped.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds `key = value`.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        if let Ok(mut entries) = storage.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        storage
    }

    fn lock(&self) -> ClientResult<std::sync::MutexGuard<'_, BTreeMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| ClientError::Session("session storage lock poisoned".into()))
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> ClientResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ClientResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> ClientResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("user").unwrap(), None);

        storage.set("user", "jane@example.com").unwrap();
        assert_eq!(storage.get("user").unwrap().as_deref(), Some("jane@example.com"));

        storage.remove("user").unwrap();
        storage.remove("user").unwrap();
        assert_eq!(storage.get("user").unwrap(), None);
    }

    #[test]
    fn test_file_storage_persists_between_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("session.json");

        FileStorage::new(&path).set("user", "namal@gmail.com").unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get("user").unwrap().as_deref(), Some("namal@gmail.com"));

        reopened.remove("user").unwrap();
        assert_eq!(FileStorage::new(&path).get("user").unwrap(), None);
    }

    #[test]
    fn test_file_storage_missing_or_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let storage = FileStorage::new(&path);
        assert_eq!(storage.get("user").unwrap(), None);
        storage.remove("user").unwrap();
        assert!(!path.exists());

        std::fs::write(&path, "").unwrap();
        assert_eq!(storage.get("user").unwrap(), None);
    }

    #[test]
    fn test_file_storage_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            FileStorage::new(&path).get("user"),
            Err(ClientError::Session(_))
        ));
    }
}
