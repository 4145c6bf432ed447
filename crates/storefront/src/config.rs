//! Storefront configuration.
//!
//! # Environment Variables
//!
//! All optional:
//! - `STOREFRONT_DATA_FILE` - JSON file backing the store (default: in-memory only)
//! - `STOREFRONT_KEY_PREFIX` - Prefix for every store key (default: `wedding_cards_`)
//! - `STOREFRONT_LATENCY_MS` - Simulated network latency for login, signup and payment (default: 1000)
//! - `STOREFRONT_ADMIN_USERNAME` - Admin login name (default: `admin`)
//! - `STOREFRONT_ADMIN_PASSWORD` - Admin password (default: `12345`)

use crate::keys::DEFAULT_KEY_PREFIX;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_LATENCY_MS: u64 = 1000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Durable store location; `None` keeps everything in memory
    pub data_file: Option<PathBuf>,
    /// Prefix for every store key
    pub key_prefix: String,
    /// Delay applied by the simulated auth and payment providers
    pub latency: Duration,
    pub admin: AdminCredentials,
    pub pricing: PricingRules,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            latency: Duration::from_millis(DEFAULT_LATENCY_MS),
            admin: AdminCredentials::default(),
            pricing: PricingRules::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from any variable source, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup("STOREFRONT_DATA_FILE").filter(|v| !v.is_empty()) {
            config.data_file = Some(PathBuf::from(path));
        }
        if let Some(prefix) = lookup("STOREFRONT_KEY_PREFIX") {
            config.key_prefix = prefix;
        }
        if let Some(latency) = lookup("STOREFRONT_LATENCY_MS") {
            let millis = latency.trim().parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_LATENCY_MS".to_string(), e.to_string())
            })?;
            config.latency = Duration::from_millis(millis);
        }
        if let Some(username) = lookup("STOREFRONT_ADMIN_USERNAME") {
            config.admin.username = username;
        }
        if let Some(password) = lookup("STOREFRONT_ADMIN_PASSWORD") {
            config.admin.password = password;
        }

        Ok(config)
    }

    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = Some(path.into());
        self
    }

    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_admin(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.admin = AdminCredentials {
            username: username.into(),
            password: password.into(),
        };
        self
    }

    pub fn with_pricing(mut self, pricing: PricingRules) -> Self {
        self.pricing = pricing;
        self
    }
}

/// The single fixed admin account.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "12345".to_string(),
        }
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Checkout pricing. Separate from the admin-editable `SiteSettings`, which checkout never reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingRules {
    /// Shipping is free when the subtotal is strictly above this
    pub free_shipping_over: f64,
    pub flat_shipping: f64,
    pub tax_rate: f64,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            free_shipping_over: 50.0,
            flat_shipping: 5.99,
            tax_rate: 0.08,
        }
    }
}
