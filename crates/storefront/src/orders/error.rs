//! Error types for the order ledger.

use store_framework::StoreError;
use thiserror::Error;

/// Errors that can occur during order operations.
///
/// An unknown order id is not an error; lookups return `Option`.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Order store error: {0}")]
    Store(#[from] StoreError),
}
