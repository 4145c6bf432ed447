//! Store key layout. Every key is `<prefix><name>`.

pub const DEFAULT_KEY_PREFIX: &str = "wedding_cards_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreKeys {
    prefix: String,
}

impl StoreKeys {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Current session slot.
    pub fn user(&self) -> String {
        format!("{}user", self.prefix)
    }

    pub fn cart(&self) -> String {
        format!("{}cart", self.prefix)
    }

    /// One order list per user.
    pub fn orders(&self, user_id: &str) -> String {
        format!("{}{}", self.orders_prefix(), user_id)
    }

    /// Prefix shared by every per-user order list; the admin scan matches on it.
    pub fn orders_prefix(&self) -> String {
        format!("{}orders_", self.prefix)
    }

    pub fn products(&self) -> String {
        format!("{}products", self.prefix)
    }

    pub fn settings(&self) -> String {
        format!("{}settings", self.prefix)
    }
}

impl Default for StoreKeys {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let keys = StoreKeys::default();
        assert_eq!(keys.user(), "wedding_cards_user");
        assert_eq!(keys.cart(), "wedding_cards_cart");
        assert_eq!(keys.orders("k3j9x0a1b"), "wedding_cards_orders_k3j9x0a1b");
        assert!(keys.orders("k3j9x0a1b").starts_with(&keys.orders_prefix()));
        assert_eq!(keys.products(), "wedding_cards_products");
        assert_eq!(keys.settings(), "wedding_cards_settings");
    }
}
