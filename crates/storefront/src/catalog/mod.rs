//! # Catalog Provider
//!
//! Serves the product list: the admin override stored under the products key when present,
//! otherwise the built-in seed catalog.
//!
//! ## Structure
//!
//! - [`seed`] - the twelve built-in products
//! - [`error`] - [`CatalogError`]
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use store_framework::MemoryStore;
//! use storefront::catalog::{CatalogProvider, CategoryFilter, ProductSort};
//! use storefront::keys::StoreKeys;
//! use storefront::model::Category;
//!
//! let catalog = CatalogProvider::new(Arc::new(MemoryStore::new()), StoreKeys::default());
//!
//! let cheapest_first = catalog
//!     .browse(CategoryFilter::Only(Category::SaveTheDate), ProductSort::PriceLowToHigh)
//!     .unwrap();
//! assert_eq!(cheapest_first[0].name, "Mehndi Design Save the Date");
//! ```

pub mod error;
pub mod seed;

pub use error::*;
pub use seed::seed_products;

use crate::keys::StoreKeys;
use crate::model::{Category, Product};
use std::sync::Arc;
use store_framework::{JsonStoreExt, KeyValueStore};
use tracing::{debug, info, instrument};

/// Product listing filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn admits(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }
}

/// Product listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSort {
    /// Featured products first; otherwise catalog order.
    #[default]
    Featured,
    PriceLowToHigh,
    PriceHighToLow,
    Name,
}

#[derive(Clone)]
pub struct CatalogProvider {
    store: Arc<dyn KeyValueStore>,
    keys: StoreKeys,
}

impl CatalogProvider {
    pub fn new(store: Arc<dyn KeyValueStore>, keys: StoreKeys) -> Self {
        Self { store, keys }
    }

    /// The stored override, or the seed catalog when none has been saved.
    #[instrument(skip(self))]
    pub fn all_products(&self) -> Result<Vec<Product>, CatalogError> {
        match self.store.read::<Vec<Product>>(&self.keys.products())? {
            Some(products) => Ok(products),
            None => {
                debug!("No catalog override stored, serving seed catalog");
                Ok(seed_products())
            }
        }
    }

    /// Replaces the whole catalog override.
    #[instrument(skip(self, products), fields(count = products.len()))]
    pub fn save_products(&self, products: &[Product]) -> Result<(), CatalogError> {
        self.store.write(&self.keys.products(), products)?;
        info!("Catalog saved");
        Ok(())
    }

    #[instrument(skip(self))]
    pub fn get_product(&self, id: &str) -> Result<Option<Product>, CatalogError> {
        Ok(self.all_products()?.into_iter().find(|p| p.id == id))
    }

    /// Up to `limit` featured products in catalog order.
    pub fn featured(&self, limit: usize) -> Result<Vec<Product>, CatalogError> {
        Ok(self
            .all_products()?
            .into_iter()
            .filter(|p| p.featured)
            .take(limit)
            .collect())
    }

    #[instrument(skip(self))]
    pub fn browse(
        &self,
        filter: CategoryFilter,
        sort: ProductSort,
    ) -> Result<Vec<Product>, CatalogError> {
        let mut products: Vec<Product> = self
            .all_products()?
            .into_iter()
            .filter(|p| filter.admits(p))
            .collect();

        // sort_by is stable, so ties keep catalog order
        match sort {
            ProductSort::Featured => products.sort_by_key(|p| !p.featured),
            ProductSort::PriceLowToHigh => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
            ProductSort::PriceHighToLow => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
            ProductSort::Name => products.sort_by(|a, b| a.name.cmp(&b.name)),
        }

        debug!(count = products.len(), "Browse results");
        Ok(products)
    }

    /// Number of products in each category, in `Category::ALL` order.
    pub fn category_counts(&self) -> Result<Vec<(Category, usize)>, CatalogError> {
        let products = self.all_products()?;
        Ok(Category::ALL
            .into_iter()
            .map(|category| {
                let count = products.iter().filter(|p| p.category == category).count();
                (category, count)
            })
            .collect())
    }
}
