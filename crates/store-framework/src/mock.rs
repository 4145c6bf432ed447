//! # Mock Stores
//!
//! Utilities for testing components against store failures.
//!
//! Happy-path tests should simply use a [`MemoryStore`]. `ScriptedStore` wraps one and lets a
//! test queue write failures for specific keys, which is the only way to exercise the gaps of a
//! non-transactional store (for example an order written while the follow-up cart write fails).
//!
//! ```rust
//! use store_framework::mock::ScriptedStore;
//! use store_framework::{JsonStoreExt, KeyValueStore};
//!
//! let store = ScriptedStore::new();
//! store.expect_write("cart").fail();
//!
//! assert!(store.write("orders", &1).is_ok());
//! assert!(store.write("cart", &2).is_err());
//! assert!(store.write("cart", &3).is_ok());
//! assert_eq!(store.inner().get("cart").unwrap(), Some(serde_json::json!(3)));
//!
//! store.verify();
//! ```

use crate::error::StoreError;
use crate::memory::MemoryStore;
use crate::store::KeyValueStore;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A scripted write failure.
struct WriteFailure {
    key: String,
}

/// A store that delegates to a [`MemoryStore`] and fails scripted writes.
///
/// Each queued failure is consumed by the first `set` or `delete` on its key.
#[derive(Clone, Default)]
pub struct ScriptedStore {
    inner: MemoryStore,
    failures: Arc<Mutex<VecDeque<WriteFailure>>>,
}

impl ScriptedStore {
    /// Creates a scripted store with no failures queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing memory store, sharing its state.
    pub fn wrapping(inner: MemoryStore) -> Self {
        Self {
            inner,
            failures: Arc::default(),
        }
    }

    /// The underlying store, for asserting on state without tripping failures.
    pub fn inner(&self) -> &MemoryStore {
        &self.inner
    }

    /// Expects a write to `key`.
    pub fn expect_write(&self, key: impl Into<String>) -> WriteExpectationBuilder {
        WriteExpectationBuilder {
            key: key.into(),
            failures: self.failures.clone(),
        }
    }

    /// Verifies that every scripted failure was triggered.
    pub fn verify(&self) {
        let failures = self.failures.lock().unwrap();
        if !failures.is_empty() {
            let keys: Vec<&str> = failures.iter().map(|f| f.key.as_str()).collect();
            panic!("Not all scripted failures were triggered: {:?}", keys);
        }
    }

    fn take_failure(&self, key: &str) -> Result<(), StoreError> {
        let mut failures = self.failures.lock().map_err(|_| StoreError::Poisoned)?;
        match failures.iter().position(|f| f.key == key) {
            Some(index) => {
                failures.remove(index);
                Err(StoreError::WriteRejected(key.to_string()))
            }
            None => Ok(()),
        }
    }
}

impl KeyValueStore for ScriptedStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.take_failure(key)?;
        self.inner.set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.take_failure(key)?;
        self.inner.delete(key)
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        self.inner.keys()
    }
}

/// Builder for write expectations.
pub struct WriteExpectationBuilder {
    key: String,
    failures: Arc<Mutex<VecDeque<WriteFailure>>>,
}

impl WriteExpectationBuilder {
    /// The next write to this key fails with [`StoreError::WriteRejected`].
    pub fn fail(self) {
        let mut failures = self.failures.lock().unwrap();
        failures.push_back(WriteFailure { key: self.key });
    }
}
