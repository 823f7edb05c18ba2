pub mod file;
pub mod keys;
pub mod kv;

pub use file::JsonFileStore;
pub use kv::{get_json, get_parsed, set_json, KvStore, MemoryStore};
