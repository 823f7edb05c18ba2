use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::str::FromStr;

/// String key/value storage with browser-storage semantics: reads and writes
/// never fail from the caller's point of view.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Read `key` and parse it with `FromStr`. Missing or malformed values are `None`.
pub fn get_parsed<T: FromStr>(store: &dyn KvStore, key: &str) -> Option<T> {
    store.get(key)?.trim().parse().ok()
}

/// Read `key` as JSON. Missing or malformed values are `None`.
pub fn get_json<T: DeserializeOwned>(store: &dyn KvStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!("ignoring malformed value for {}: {}", key, e);
            None
        }
    }
}

pub fn set_json<T: Serialize + ?Sized>(store: &mut dyn KvStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => store.set(key, &json),
        Err(e) => tracing::warn!("failed to encode value for {}: {}", key, e),
    }
}
