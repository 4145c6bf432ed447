//! Error types for the session.

use store_framework::StoreError;
use thiserror::Error;

/// Errors that can occur during session operations.
///
/// Failed admin credentials are not an error; `admin_login` returns `None`.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Signup form password and confirmation differ.
    #[error("Passwords don't match")]
    PasswordMismatch,

    #[error("Session store error: {0}")]
    Store(#[from] StoreError),
}
