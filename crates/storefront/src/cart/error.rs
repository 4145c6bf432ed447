//! Error types for the cart.

use store_framework::StoreError;
use thiserror::Error;

/// Errors that can occur during cart operations.
///
/// Removing or updating a line that is not in the cart is not an error.
#[derive(Debug, Error)]
pub enum CartError {
    /// Items are added at least one at a time, and a line holds at most `u32::MAX` units.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    #[error("Cart store error: {0}")]
    Store(#[from] StoreError),
}
