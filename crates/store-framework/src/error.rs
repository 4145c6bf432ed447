//! # Store Errors
//!
//! This module defines the common error type used by every [`KeyValueStore`](crate::KeyValueStore)
//! implementation. An absent key is never an error; these variants cover the
//! infrastructure failures underneath the store.

/// Errors that can occur within a key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Store serialization error on key {key}: {source}")]
    Serde {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Store lock poisoned")]
    Poisoned,
    #[error("Write rejected for key {0}")]
    WriteRejected(String),
}

impl StoreError {
    pub(crate) fn serde(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serde {
            key: key.into(),
            source,
        }
    }
}
