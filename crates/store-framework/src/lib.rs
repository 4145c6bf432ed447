//! # Store Framework
//!
//! Persistence plumbing for client-local applications: one string-keyed store of JSON values,
//! typed access on top of it, and change signals for whoever reads it.
//!
//! ## Architecture Overview
//!
//! 1. **Capability** ([`KeyValueStore`]) - `get`, `set`, `delete`, `keys`. The only I/O primitive.
//! 2. **Implementations** ([`MemoryStore`], [`FileStore`]) - volatile and durable backends.
//! 3. **Typed access** ([`JsonStoreExt`]) - decode/encode domain types on every access.
//! 4. **Signals** ([`SignalBus`]) - payload-less broadcast so dependents know when to re-read.
//!
//! Domain components hold an `Arc<dyn KeyValueStore>` and never bind to a concrete backend,
//! so the same code runs on disk in production and in memory under test.
//!
//! ```rust
//! use std::sync::Arc;
//! use store_framework::{JsonStoreExt, KeyValueStore, MemoryStore};
//!
//! let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
//! store.write("app_settings", &vec!["invitation", "menu"]).unwrap();
//!
//! let categories: Vec<String> = store.read_or_default("app_settings").unwrap();
//! assert_eq!(categories.len(), 2);
//! ```
//!
//! ## Testing
//!
//! See [`mock`] for a store that fails scripted writes.

pub mod error;
pub mod file;
pub mod json_ext;
pub mod memory;
pub mod mock;
pub mod signal;
pub mod store;
pub mod tracing;

pub use error::StoreError;
pub use file::FileStore;
pub use json_ext::JsonStoreExt;
pub use memory::MemoryStore;
pub use signal::SignalBus;
pub use store::KeyValueStore;
