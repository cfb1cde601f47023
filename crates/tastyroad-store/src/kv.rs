//! Key-value store contract and its in-memory and file-backed implementations

use crate::error::StoreError;
use crate::io::{atomic_write, read_json};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Persists serialized values by string key.
///
/// Writes are best-effort: an implementation that fails to reach its backing
/// medium logs the failure and keeps serving the value from memory, so
/// `exists` and `load_value` observe a write as soon as it returns.
pub trait KeyValueStore: Send + Sync {
    fn exists(&self, key: &str) -> bool;

    fn save_value(&self, key: &str, value: Value);

    fn load_value(&self, key: &str) -> Option<Value>;

    fn remove(&self, key: &str);
}

/// Typed helpers over any [`KeyValueStore`]
pub trait KeyValueStoreExt: KeyValueStore {
    fn save<T: Serialize + ?Sized>(&self, value: &T, key: &str) {
        match serde_json::to_value(value) {
            Ok(json) => self.save_value(key, json),
            Err(e) => tracing::warn!(%e, key, "Failed to encode value"),
        }
    }

    /// Load and decode a value; undecodable values read as absent
    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let json = self.load_value(key)?;
        match serde_json::from_value(json) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!(%e, key, "Stored value does not decode");
                None
            }
        }
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}

fn lock(entries: &Mutex<BTreeMap<String, Value>>) -> MutexGuard<'_, BTreeMap<String, Value>> {
    entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Volatile store, used by tests and dry runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.entries).is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn exists(&self, key: &str) -> bool {
        lock(&self.entries).contains_key(key)
    }

    fn save_value(&self, key: &str, value: Value) {
        lock(&self.entries).insert(key.to_string(), value);
    }

    fn load_value(&self, key: &str) -> Option<Value> {
        lock(&self.entries).get(key).cloned()
    }

    fn remove(&self, key: &str) {
        lock(&self.entries).remove(key);
    }
}

/// Store backed by a single JSON object on disk, rewritten atomically on every change
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, Value>>,
}

impl JsonFileStore {
    /// Open (or lazily create) the store at `path`.
    ///
    /// A corrupt file is logged and treated as empty; it is replaced on the
    /// next write.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let entries = match read_json::<BTreeMap<String, Value>>(path) {
            Ok(found) => found.unwrap_or_default(),
            Err(StoreError::Json { path, source }) => {
                tracing::warn!(?path, %source, "Store file is corrupt, starting empty");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            path: path.to_path_buf(),
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, Value>) {
        let json = match serde_json::to_vec_pretty(entries) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(%e, "Failed to encode store");
                return;
            }
        };

        if let Err(e) = atomic_write(&self.path, &json) {
            tracing::warn!(path = ?self.path, %e, "Failed to write store");
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn exists(&self, key: &str) -> bool {
        lock(&self.entries).contains_key(key)
    }

    fn save_value(&self, key: &str, value: Value) {
        let mut entries = lock(&self.entries);
        entries.insert(key.to_string(), value);
        self.flush(&entries);
    }

    fn load_value(&self, key: &str) -> Option<Value> {
        lock(&self.entries).get(key).cloned()
    }

    fn remove(&self, key: &str) {
        let mut entries = lock(&self.entries);
        if entries.remove(key).is_some() {
            self.flush(&entries);
        }
    }
}
