//! # JsonStoreExt Trait
//!
//! Typed access on top of any [`KeyValueStore`]. Stores hold raw `serde_json::Value`s; this
//! extension decodes them into domain types on every read, so each caller works on a fresh
//! copy and a mutation of a returned value never reaches the store until it is written back.
//!
//! ```rust
//! use store_framework::{JsonStoreExt, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.write("cart_count", &3u32).unwrap();
//!
//! let count: Option<u32> = store.read("cart_count").unwrap();
//! assert_eq!(count, Some(3));
//!
//! let missing: Vec<String> = store.read_or_default("orders_nobody").unwrap();
//! assert!(missing.is_empty());
//! ```

use crate::error::StoreError;
use crate::store::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Typed read/write helpers, implemented for every store.
pub trait JsonStoreExt {
    /// Decodes the value under `key`, `None` when absent.
    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError>;

    /// Decodes the value under `key`, falling back to `T::default()` when absent.
    fn read_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T, StoreError> {
        Ok(self.read(key)?.unwrap_or_default())
    }

    /// Encodes `value` and stores it under `key`.
    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError>;

    /// Lists the keys starting with `prefix`.
    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError>;
}

impl<S: KeyValueStore + ?Sized> JsonStoreExt for S {
    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.get(key)? {
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| StoreError::serde(key, e)),
            None => Ok(None),
        }
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let value = serde_json::to_value(value).map_err(|e| StoreError::serde(key, e))?;
        self.set(key, value)
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        Ok(self
            .keys()?
            .into_iter()
            .filter(|key| key.starts_with(prefix))
            .collect())
    }
}
