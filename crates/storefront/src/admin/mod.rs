//! # Admin Aggregator
//!
//! Back-office views that cut across every user's order list and the catalog.
//!
//! Orders are discovered by scanning store keys for the orders prefix. [`AdminAggregator::get_all_orders`]
//! is the only place a global newest-first ordering is established; each per-user list is only
//! ordered by its own prepends.
//!
//! ## Structure
//!
//! - [`analytics`] - [`Analytics`] and [`PopularProduct`]
//! - [`error`] - [`AdminError`]
//!
//! ## Derived customers
//!
//! There is no customer registry. [`AdminAggregator::get_all_customers`] synthesizes one
//! [`User`] per distinct order owner from that owner's newest order: the shipping name becomes
//! the name and `<name>@customer.com` the email. Shipping names are not identities, so two
//! customers who ship under the same name look alike and a blank name yields `@customer.com`.

pub mod analytics;
pub mod error;

pub use analytics::*;
pub use error::*;

use crate::catalog::CatalogProvider;
use crate::ids::product_id;
use crate::keys::StoreKeys;
use crate::model::{Order, OrderStatus, Product, ProductUpdate, SiteSettings, User};
use crate::settings::SettingsStore;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::Arc;
use store_framework::{JsonStoreExt, KeyValueStore};
use tracing::{debug, info, instrument, warn};

/// Admin order-list filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderQuery {
    pub status: Option<OrderStatus>,
    /// Case-insensitive substring of the order id or shipping name
    pub search: Option<String>,
}

impl OrderQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn matches(&self, order: &Order) -> bool {
        if self.status.is_some_and(|status| order.status != status) {
            return false;
        }
        match self.search.as_deref().filter(|s| !s.is_empty()) {
            Some(search) => {
                let needle = search.to_lowercase();
                order.id.to_lowercase().contains(&needle)
                    || order.shipping_address.name.to_lowercase().contains(&needle)
            }
            None => true,
        }
    }
}

#[derive(Clone)]
pub struct AdminAggregator {
    store: Arc<dyn KeyValueStore>,
    keys: StoreKeys,
    catalog: CatalogProvider,
    settings: SettingsStore,
}

impl AdminAggregator {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        keys: StoreKeys,
        catalog: CatalogProvider,
        settings: SettingsStore,
    ) -> Self {
        Self {
            store,
            keys,
            catalog,
            settings,
        }
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Every user's orders, newest first by `created_at`.
    #[instrument(skip(self))]
    pub fn get_all_orders(&self) -> Result<Vec<Order>, AdminError> {
        let mut all = Vec::new();
        for key in self.store.keys_with_prefix(&self.keys.orders_prefix())? {
            let orders: Vec<Order> = self.store.read_or_default(&key)?;
            all.extend(orders);
        }
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        debug!(count = all.len(), "Collected orders");
        Ok(all)
    }

    /// Sets the status of the first order with `order_id` and stamps `updated_at`.
    ///
    /// Only the owning user's list is rewritten. Returns `false` when no order matches.
    #[instrument(skip(self))]
    pub fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<bool, AdminError> {
        for key in self.store.keys_with_prefix(&self.keys.orders_prefix())? {
            let mut orders: Vec<Order> = self.store.read_or_default(&key)?;
            if let Some(order) = orders.iter_mut().find(|o| o.id == order_id) {
                let previous = order.status;
                order.status = status;
                order.updated_at = Utc::now();
                self.store.write(&key, &orders)?;
                info!(%previous, "Order status updated");
                return Ok(true);
            }
        }
        warn!("Order not found");
        Ok(false)
    }

    pub fn search_orders(&self, query: &OrderQuery) -> Result<Vec<Order>, AdminError> {
        Ok(self
            .get_all_orders()?
            .into_iter()
            .filter(|order| query.matches(order))
            .collect())
    }

    // =========================================================================
    // Products
    // =========================================================================

    pub fn get_all_products(&self) -> Result<Vec<Product>, AdminError> {
        Ok(self.catalog.all_products()?)
    }

    pub fn save_products(&self, products: &[Product]) -> Result<(), AdminError> {
        Ok(self.catalog.save_products(products)?)
    }

    /// Appends `product`, giving it a millisecond-clock id when it has none. Ids are not checked
    /// for uniqueness.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_product(&self, mut product: Product) -> Result<Product, AdminError> {
        if product.id.is_empty() {
            product.id = product_id();
        }
        let mut products = self.get_all_products()?;
        products.push(product.clone());
        self.save_products(&products)?;
        info!(product_id = %product.id, "Product added");
        Ok(product)
    }

    /// Applies `update` to the product with `product_id`; `false` if there is none.
    #[instrument(skip(self, update))]
    pub fn update_product(
        &self,
        product_id: &str,
        update: ProductUpdate,
    ) -> Result<bool, AdminError> {
        let mut products = self.get_all_products()?;
        let Some(product) = products.iter_mut().find(|p| p.id == product_id) else {
            warn!("Product not found");
            return Ok(false);
        };
        update.apply_to(product);
        self.save_products(&products)?;
        info!("Product updated");
        Ok(true)
    }

    /// Removes the product from the catalog. Orders keep their embedded snapshots.
    #[instrument(skip(self))]
    pub fn delete_product(&self, product_id: &str) -> Result<bool, AdminError> {
        let mut products = self.get_all_products()?;
        let before = products.len();
        products.retain(|p| p.id != product_id);
        if products.len() == before {
            warn!("Product not found");
            return Ok(false);
        }
        self.save_products(&products)?;
        info!("Product deleted");
        Ok(true)
    }

    // =========================================================================
    // Customers
    // =========================================================================

    /// One derived user per distinct order owner, newest customer first.
    pub fn get_all_customers(&self) -> Result<Vec<User>, AdminError> {
        let mut seen = HashSet::new();
        Ok(self
            .get_all_orders()?
            .into_iter()
            .filter(|order| seen.insert(order.user_id.clone()))
            .map(|order| User {
                email: format!("{}@customer.com", order.shipping_address.name),
                name: order.shipping_address.name,
                id: order.user_id,
                created_at: order.created_at,
                role: None,
            })
            .collect())
    }

    pub fn customer_orders(&self, user_id: &str) -> Result<Vec<Order>, AdminError> {
        Ok(self
            .get_all_orders()?
            .into_iter()
            .filter(|order| order.user_id == user_id)
            .collect())
    }

    pub fn customer_order_count(&self, user_id: &str) -> Result<usize, AdminError> {
        Ok(self.customer_orders(user_id)?.len())
    }

    /// Sum of the customer's non-cancelled order totals.
    pub fn customer_total_spent(&self, user_id: &str) -> Result<f64, AdminError> {
        Ok(self
            .customer_orders(user_id)?
            .iter()
            .filter(|order| order.status != OrderStatus::Cancelled)
            .map(|order| order.total)
            .sum())
    }

    // =========================================================================
    // Analytics & settings
    // =========================================================================

    #[instrument(skip(self))]
    pub fn get_analytics(&self) -> Result<Analytics, AdminError> {
        let orders = self.get_all_orders()?;
        let products = self.get_all_products()?;
        let analytics = Analytics::compute(&orders, &products);
        debug!(
            total_orders = analytics.total_orders,
            total_revenue = analytics.total_revenue,
            "Analytics computed"
        );
        Ok(analytics)
    }

    pub fn get_settings(&self) -> Result<SiteSettings, AdminError> {
        Ok(self.settings.get()?)
    }

    pub fn save_settings(&self, settings: &SiteSettings) -> Result<(), AdminError> {
        Ok(self.settings.save(settings)?)
    }
}
