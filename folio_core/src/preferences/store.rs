use crate::utils::error::StoreError;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Key under which the colour theme is persisted.
pub const THEME_KEY: &str = "theme";
/// Session flag marking that the visitor notification was attempted.
pub const VISITOR_ALERT_KEY: &str = "visitor_alert_sent";

/// String key-value storage for small user preferences and session flags.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Stores `value` only if `key` is unset. Returns true if this call set it.
    ///
    /// The check and the write happen under one lock.
    fn set_if_absent(&self, key: &str, value: &str) -> Result<bool, StoreError>;
}

/// Process-lifetime store. Used for session flags and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn set_if_absent(&self, key: &str, value: &str) -> Result<bool, StoreError> {
        let mut values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        if values.contains_key(key) {
            return Ok(false);
        }
        values.insert(key.to_string(), value.to_string());
        Ok(true)
    }
}

/// JSON object on disk, rewritten on every change.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
                path: path.display().to_string(),
                source,
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => {
                return Err(StoreError::Read {
                    path: path.display().to_string(),
                    source,
                })
            }
        };

        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, values: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let write_err = |source| StoreError::Write {
            path: self.path.display().to_string(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = serde_json::to_string_pretty(values).map_err(|err| StoreError::Write {
            path: self.path.display().to_string(),
            source: err.into(),
        })?;
        fs::write(&self.path, content).map_err(write_err)
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        self.persist(&values)
    }

    fn set_if_absent(&self, key: &str, value: &str) -> Result<bool, StoreError> {
        let mut values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        if values.contains_key(key) {
            return Ok(false);
        }
        values.insert(key.to_string(), value.to_string());
        self.persist(&values)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_set_if_absent_claims_once() {
        let store = MemoryStore::new();
        assert!(store.set_if_absent(VISITOR_ALERT_KEY, "true").unwrap());
        assert!(!store.set_if_absent(VISITOR_ALERT_KEY, "true").unwrap());
        assert_eq!(store.get(VISITOR_ALERT_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(THEME_KEY), None);
        store.set(THEME_KEY, "light").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_file_store_rejects_non_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        assert_matches!(FileStore::open(&path), Err(StoreError::Corrupt { .. }));
    }

    #[test]
    fn test_empty_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(THEME_KEY), None);
    }
}
