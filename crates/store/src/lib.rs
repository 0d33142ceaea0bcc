pub mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage keys for the four persisted collections.
pub mod keys {
    pub const RECIPES: &str = "recipes";
    pub const MEALS: &str = "meals";
    pub const SHOPPING: &str = "shopping";
    pub const STAPLES: &str = "staples";
}

/// Opaque key-value string store the application persists into.
///
/// The store is a local cache, not a system of record: callers degrade
/// gracefully when it misbehaves instead of failing the user's operation.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Read and decode a collection, falling back to its default on a missing
/// key, an unreadable store, or malformed data. Failures are logged, never
/// propagated.
pub fn load_or_default<T>(store: &dyn KvStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(err) => {
            tracing::warn!(key, error = %err, "failed to read persisted data, starting from default");
            return T::default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, error = %err, "persisted data is malformed, starting from default");
            T::default()
        }
    }
}

/// Encode and write a collection. A failed write is logged and dropped;
/// the in-memory state stays authoritative for the session.
pub fn persist<T>(store: &mut dyn KvStore, key: &str, value: &T)
where
    T: Serialize,
{
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::error!(key, error = %err, "failed to encode data, skipping write");
            return;
        }
    };
    if let Err(err) = store.set(key, &raw) {
        tracing::error!(key, error = %err, "failed to persist data, keeping in-memory state");
    }
}
