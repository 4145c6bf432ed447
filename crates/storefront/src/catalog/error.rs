//! Error types for the catalog.

use store_framework::StoreError;
use thiserror::Error;

/// Errors that can occur during catalog operations.
///
/// A missing product is not an error; lookups return `Option`.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The product list could not be read or written.
    #[error("Catalog store error: {0}")]
    Store(#[from] StoreError),
}
