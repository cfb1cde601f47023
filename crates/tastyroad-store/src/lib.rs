//! Key-value persistence for launch state and local records

mod error;
mod io;
mod kv;
mod paths;

pub use error::StoreError;
pub use io::{atomic_write, read_json};
pub use kv::{JsonFileStore, KeyValueStore, KeyValueStoreExt, MemoryStore};
pub use paths::Paths;
