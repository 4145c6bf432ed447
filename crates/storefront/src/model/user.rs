use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role. Users without a role are regular customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// Represents a signed-in user, or a customer derived from order history.
///
/// There is no account registry: every login fabricates a fresh `User` and the current one
/// lives in the single session slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl User {
    /// Creates a regular (role-less) user created now.
    pub fn new(id: impl Into<String>, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
            created_at: Utc::now(),
            role: None,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }
}

/// True iff a user is present and has the admin role.
pub fn is_admin(user: Option<&User>) -> bool {
    user.is_some_and(User::is_admin)
}
