//! Site settings persistence.

use crate::keys::StoreKeys;
use crate::model::SiteSettings;
use std::sync::Arc;
use store_framework::{JsonStoreExt, KeyValueStore, StoreError};
use tracing::{info, instrument};

#[derive(Clone)]
pub struct SettingsStore {
    store: Arc<dyn KeyValueStore>,
    keys: StoreKeys,
}

impl SettingsStore {
    pub fn new(store: Arc<dyn KeyValueStore>, keys: StoreKeys) -> Self {
        Self { store, keys }
    }

    /// Stored settings, or the defaults when none have been saved.
    pub fn get(&self) -> Result<SiteSettings, StoreError> {
        self.store.read_or_default(&self.keys.settings())
    }

    #[instrument(skip(self, settings))]
    pub fn save(&self, settings: &SiteSettings) -> Result<(), StoreError> {
        self.store.write(&self.keys.settings(), settings)?;
        info!(
            shipping_rate = settings.shipping_rate,
            tax_rate = settings.tax_rate,
            "Settings saved"
        );
        Ok(())
    }
}
