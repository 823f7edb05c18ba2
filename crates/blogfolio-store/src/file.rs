use anyhow::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::kv::KvStore;

/// A `KvStore` persisted as one pretty-printed JSON object.
///
/// Every mutation rewrites the file. Read and write failures are logged and
/// otherwise ignored: the in-memory view stays authoritative for the process.
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing or unparsable file yields an empty store.
    pub fn open(path: &Path) -> Self {
        let entries = match Self::load(path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("starting with empty store at {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };
        Self {
            path: path.to_path_buf(),
            entries,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    fn flush(&self) {
        if let Err(e) = self.save() {
            tracing::warn!("failed to write store {}: {}", self.path.display(), e);
        }
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.flush();
        }
    }
}
