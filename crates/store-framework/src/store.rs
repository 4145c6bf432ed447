//! # KeyValueStore Trait
//!
//! The `KeyValueStore` trait is the single I/O capability every domain component is built on.
//! It models a process-wide, string-keyed store of JSON values: `get`, `set`, `delete` and
//! `keys`. Components receive the store as a trait object, so production code can run on a
//! durable [`FileStore`](crate::FileStore) while tests run on a [`MemoryStore`](crate::MemoryStore)
//! or one of the [`mock`](crate::mock) stores without any change to the callers.
//!
//! # Contract
//!
//! - Operations are synchronous and atomic at single-key granularity.
//! - `get` on an absent key returns `Ok(None)`; `delete` on an absent key returns `Ok(())`.
//! - There is no multi-key transaction. Two `set` calls are two independent writes.
//! - `keys` enumerates every stored key; callers filter by prefix.

use crate::error::StoreError;
use serde_json::Value;

/// Persistent string-keyed store of JSON values.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Removes `key`. Removing an absent key is a no-op.
    fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Lists every key currently stored.
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}
