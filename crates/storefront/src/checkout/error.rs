//! Error types for checkout.

use crate::cart::CartError;
use crate::orders::OrderError;
use crate::payment::PaymentError;
use crate::session::SessionError;
use thiserror::Error;

/// Errors that can occur while placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout requires a session.
    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Cart is empty")]
    EmptyCart,

    /// The gateway answered with a decline. Nothing was written.
    #[error("Payment failed: {0}")]
    PaymentDeclined(String),

    #[error(transparent)]
    Gateway(#[from] PaymentError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Ledger(#[from] OrderError),

    /// The order was paid for and saved, but the cart still holds its items.
    #[error("Order {order_id} was placed but the cart could not be cleared: {source}")]
    CartNotCleared {
        order_id: String,
        #[source]
        source: CartError,
    },
}
