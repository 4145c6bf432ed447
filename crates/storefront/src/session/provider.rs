//! Swappable authentication capability.

use crate::config::AdminCredentials;
use crate::ids::random_id;
use crate::model::{Role, User};
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use tracing::{debug, instrument};

pub const ADMIN_USER_ID: &str = "admin-001";
pub const ADMIN_EMAIL: &str = "admin@weddingcards.com";

/// Resolves credentials into a [`User`].
///
/// Implementations never persist anything; the session manager owns the session slot.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn authenticate(&self, email: &str, password: &str) -> User;

    async fn register(&self, email: &str, password: &str, name: &str) -> User;

    /// `None` when the credentials are not the admin's.
    async fn authenticate_admin(&self, username: &str, password: &str) -> Option<User>;
}

/// Accepts any customer credentials after a fixed delay and fabricates a fresh user each time.
#[derive(Debug, Clone)]
pub struct SimulatedAuth {
    latency: Duration,
    admin: AdminCredentials,
}

impl SimulatedAuth {
    pub fn new(latency: Duration, admin: AdminCredentials) -> Self {
        Self { latency, admin }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

/// Part of the email before `@`.
pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

#[async_trait]
impl AuthProvider for SimulatedAuth {
    #[instrument(skip(self, _password))]
    async fn authenticate(&self, email: &str, _password: &str) -> User {
        self.simulate_latency().await;
        let user = User::new(random_id(), email, email_local_part(email));
        debug!(user_id = %user.id, "Fabricated user");
        user
    }

    #[instrument(skip(self, _password))]
    async fn register(&self, email: &str, _password: &str, name: &str) -> User {
        self.simulate_latency().await;
        let name = if name.trim().is_empty() {
            email_local_part(email)
        } else {
            name
        };
        let user = User::new(random_id(), email, name);
        debug!(user_id = %user.id, "Fabricated user");
        user
    }

    #[instrument(skip(self, password))]
    async fn authenticate_admin(&self, username: &str, password: &str) -> Option<User> {
        self.simulate_latency().await;
        if !self.admin.matches(username, password) {
            return None;
        }
        Some(User {
            id: ADMIN_USER_ID.to_string(),
            email: ADMIN_EMAIL.to_string(),
            name: "Admin".to_string(),
            created_at: Utc::now(),
            role: Some(Role::Admin),
        })
    }
}
