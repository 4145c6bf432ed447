//! Error types for payment processing.

use thiserror::Error;

/// Errors that can occur while talking to a payment gateway.
///
/// A declined card is not an error: it is a [`PaymentResult`](super::PaymentResult) with
/// `success == false`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentError {
    /// The gateway could not be reached or answered nonsense.
    #[error("Payment gateway unavailable: {0}")]
    Gateway(String),
}
