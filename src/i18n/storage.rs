//! Client persistent storage for the locale preference.
//!
//! Mirrors what a browser page gets from `localStorage`: string keys, string
//! values, and nothing that can fail observably. A store that cannot be read
//! behaves as empty; a write that fails is logged and dropped.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Key/value persistence on the client.
pub trait PreferenceStore {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    /// * `Some(value)` if the key is present
    /// * `None` if it is absent or the backing store cannot be read
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// Writes never fail from the caller's point of view; a backing store
    /// that cannot persist logs a warning instead.
    fn set(&mut self, key: &str, value: &str);
}

/// Store held in memory for the lifetime of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding one entry, as if written earlier.
    ///
    /// # Arguments
    /// * `key` - Storage key (the session uses `"language"`)
    /// * `value` - Raw stored value; it is not validated here
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.set(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Store backed by a JSON object on disk (`{"language": "ko"}`).
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store for the JSON file at `path`.
    ///
    /// Nothing is read or created until the first `get` or `set`; a missing
    /// file reads as empty.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Map<String, Value> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return Map::new(),
        };

        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                warn!(
                    path = %self.path.display(),
                    "preference store is not a JSON object, treating as empty"
                );
                Map::new()
            }
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.load().get(key) {
            Some(Value::String(value)) => Some(value.clone()),
            _ => None,
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        let mut map = self.load();
        map.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %e, "failed to create store directory");
                return;
            }
        }

        let json = match serde_json::to_string_pretty(&Value::Object(map)) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to serialize preference store");
                return;
            }
        };

        if let Err(e) = fs::write(&self.path, json) {
            warn!(path = %self.path.display(), error = %e, "failed to write preference store");
        }
    }
}
