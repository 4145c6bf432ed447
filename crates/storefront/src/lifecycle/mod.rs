//! # Storefront Lifecycle
//!
//! [`Storefront`] builds every manager over one shared store and signal bus.
//!
//! ```rust
//! use storefront::config::StorefrontConfig;
//! use storefront::lifecycle::Storefront;
//! use std::time::Duration;
//!
//! let config = StorefrontConfig::default().with_latency(Duration::ZERO);
//! let shop = Storefront::open(config).unwrap();
//!
//! let product = shop.catalog.get_product("1").unwrap().unwrap();
//! shop.cart.add_to_cart(&product, 2, None).unwrap();
//! assert_eq!(shop.cart.get_cart_count().unwrap(), 2);
//! ```
//!
//! ## Dependency Injection
//!
//! [`Storefront::open`] picks the backend from the configuration: a [`FileStore`] when a data
//! file is set, a [`MemoryStore`] otherwise. Tests use [`Storefront::with_parts`] to inject a
//! scripted store, a fake auth provider or a mock payment gateway.

use crate::admin::AdminAggregator;
use crate::cart::CartManager;
use crate::catalog::CatalogProvider;
use crate::checkout::Checkout;
use crate::config::StorefrontConfig;
use crate::keys::StoreKeys;
use crate::orders::OrderLedger;
use crate::payment::{PaymentGateway, SimulatedGateway};
use crate::session::{AuthProvider, SessionManager, SimulatedAuth};
use crate::settings::SettingsStore;
use crate::signals::StorefrontSignals;
use std::sync::Arc;
use store_framework::{FileStore, KeyValueStore, MemoryStore, StoreError};
use tracing::info;

/// The assembled storefront.
#[derive(Clone)]
pub struct Storefront {
    pub catalog: CatalogProvider,
    pub cart: CartManager,
    pub session: SessionManager,
    pub orders: OrderLedger,
    pub admin: AdminAggregator,
    pub settings: SettingsStore,
    pub checkout: Checkout,
    pub signals: StorefrontSignals,
    store: Arc<dyn KeyValueStore>,
}

impl Storefront {
    /// Opens the configured store and wires the simulated auth and payment providers.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the data file exists but cannot be read or parsed.
    pub fn open(config: StorefrontConfig) -> Result<Self, StoreError> {
        let store: Arc<dyn KeyValueStore> = match &config.data_file {
            Some(path) => {
                info!(path = %path.display(), "Opening file-backed store");
                Arc::new(FileStore::open(path)?)
            }
            None => {
                info!("Using in-memory store");
                Arc::new(MemoryStore::new())
            }
        };
        let auth = Arc::new(SimulatedAuth::new(config.latency, config.admin.clone()));
        let gateway = Arc::new(SimulatedGateway::new(config.latency));
        Ok(Self::with_parts(store, auth, gateway, &config))
    }

    /// Wires the managers around caller-supplied capabilities.
    pub fn with_parts(
        store: Arc<dyn KeyValueStore>,
        auth: Arc<dyn AuthProvider>,
        gateway: Arc<dyn PaymentGateway>,
        config: &StorefrontConfig,
    ) -> Self {
        let keys = StoreKeys::new(config.key_prefix.clone());
        let signals = StorefrontSignals::new();

        let catalog = CatalogProvider::new(store.clone(), keys.clone());
        let cart = CartManager::new(store.clone(), keys.clone(), signals.clone());
        let session = SessionManager::new(store.clone(), keys.clone(), signals.clone(), auth);
        let orders = OrderLedger::new(store.clone(), keys.clone());
        let settings = SettingsStore::new(store.clone(), keys.clone());
        let admin = AdminAggregator::new(store.clone(), keys, catalog.clone(), settings.clone());
        let checkout = Checkout::new(
            cart.clone(),
            session.clone(),
            orders.clone(),
            gateway,
            config.pricing,
        );

        Self {
            catalog,
            cart,
            session,
            orders,
            admin,
            settings,
            checkout,
            signals,
            store,
        }
    }

    /// The shared backing store.
    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }
}
