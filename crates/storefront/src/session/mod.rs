//! # Identity & Session
//!
//! The session is a single slot in the store holding the current [`User`]. Logging in
//! overwrites it and logging out deletes it; there is no account registry behind it.
//!
//! Credential checks are delegated to an [`AuthProvider`] so the simulated provider can be
//! replaced by a real one without touching callers.
//!
//! ## Structure
//!
//! - [`provider`] - [`AuthProvider`] trait and [`SimulatedAuth`]
//! - [`error`] - [`SessionError`]

pub mod error;
pub mod provider;

pub use error::*;
pub use provider::*;

use crate::keys::StoreKeys;
use crate::model::{self, User};
use crate::signals::{StorefrontSignal, StorefrontSignals};
use std::sync::Arc;
use store_framework::{JsonStoreExt, KeyValueStore};
use tracing::{debug, info, instrument, warn};

/// Fields of the signup page.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.password != self.confirm_password {
            return Err(SessionError::PasswordMismatch);
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
    keys: StoreKeys,
    signals: StorefrontSignals,
    auth: Arc<dyn AuthProvider>,
}

impl SessionManager {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        keys: StoreKeys,
        signals: StorefrontSignals,
        auth: Arc<dyn AuthProvider>,
    ) -> Self {
        Self {
            store,
            keys,
            signals,
            auth,
        }
    }

    pub fn get_stored_user(&self) -> Result<Option<User>, SessionError> {
        Ok(self.store.read(&self.keys.user())?)
    }

    /// Overwrites the session slot, or clears it with `None`.
    #[instrument(skip(self, user), fields(user_id = user.map(|u| u.id.as_str())))]
    pub fn set_stored_user(&self, user: Option<&User>) -> Result<(), SessionError> {
        match user {
            Some(user) => self.store.write(&self.keys.user(), user)?,
            None => self.store.delete(&self.keys.user())?,
        }
        self.signals.emit(StorefrontSignal::AuthChanged);
        Ok(())
    }

    /// Always succeeds with a freshly fabricated user, replacing any current session.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<User, SessionError> {
        debug!("Logging in");
        let user = self.auth.authenticate(email, password).await;
        self.set_stored_user(Some(&user))?;
        info!(user_id = %user.id, "Logged in");
        Ok(user)
    }

    #[instrument(skip(self, password))]
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<User, SessionError> {
        debug!("Signing up");
        let user = self.auth.register(email, password, name).await;
        self.set_stored_user(Some(&user))?;
        info!(user_id = %user.id, "Signed up");
        Ok(user)
    }

    /// Validates the form, then signs up. A mismatch leaves the session untouched.
    pub async fn register(&self, form: &SignupForm) -> Result<User, SessionError> {
        if let Err(e) = form.validate() {
            warn!(email = %form.email, "Signup rejected: {}", e);
            return Err(e);
        }
        self.signup(&form.email, &form.password, &form.name).await
    }

    /// `None` on wrong credentials, in which case nothing is persisted.
    #[instrument(skip(self, password))]
    pub async fn admin_login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, SessionError> {
        match self.auth.authenticate_admin(username, password).await {
            Some(admin) => {
                self.set_stored_user(Some(&admin))?;
                info!("Admin logged in");
                Ok(Some(admin))
            }
            None => {
                warn!("Admin login rejected");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self))]
    pub fn logout(&self) -> Result<(), SessionError> {
        self.set_stored_user(None)?;
        info!("Logged out");
        Ok(())
    }

    /// Whether the current session belongs to an admin.
    pub fn is_admin(&self) -> Result<bool, SessionError> {
        Ok(model::is_admin(self.get_stored_user()?.as_ref()))
    }
}
