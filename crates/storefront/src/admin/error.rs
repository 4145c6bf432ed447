//! Error types for the admin aggregator.

use crate::catalog::CatalogError;
use store_framework::StoreError;
use thiserror::Error;

/// Errors that can occur during admin operations.
///
/// Unknown order or product ids are reported as `false`/`None`, not as errors.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("Admin store error: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
