//! # Cart Manager
//!
//! The cart is one list of [`CartItem`]s stored under the cart key. A line is identified by its
//! product id together with its customization, so the same card with two different couples'
//! names occupies two lines.
//!
//! Every mutator reads the list, edits it, writes it back, emits
//! [`StorefrontSignal::CartChanged`] and returns the resulting cart.
//!
//! Quantities are not clamped against `product.stock` here; bounding them is the caller's job.
//! Totals use the product snapshot embedded in each line, never the live catalog.

pub mod error;

pub use error::*;

use crate::keys::StoreKeys;
use crate::model::{CartItem, Customization, Product};
use crate::signals::{StorefrontSignal, StorefrontSignals};
use std::sync::Arc;
use store_framework::{JsonStoreExt, KeyValueStore};
use tracing::{debug, info, instrument, warn};

#[derive(Clone)]
pub struct CartManager {
    store: Arc<dyn KeyValueStore>,
    keys: StoreKeys,
    signals: StorefrontSignals,
}

impl CartManager {
    pub fn new(store: Arc<dyn KeyValueStore>, keys: StoreKeys, signals: StorefrontSignals) -> Self {
        Self {
            store,
            keys,
            signals,
        }
    }

    /// Current cart, empty when nothing is stored.
    pub fn get_cart(&self) -> Result<Vec<CartItem>, CartError> {
        Ok(self.store.read_or_default(&self.keys.cart())?)
    }

    /// Replaces the whole cart.
    #[instrument(skip(self, items), fields(lines = items.len()))]
    pub fn set_cart(&self, items: &[CartItem]) -> Result<(), CartError> {
        self.store.write(&self.keys.cart(), items)?;
        self.signals.emit(StorefrontSignal::CartChanged);
        Ok(())
    }

    /// Adds `quantity` units of `product`, merging into an existing line with the same identity.
    ///
    /// New lines are appended; existing lines keep their position.
    #[instrument(skip(self, product, customization), fields(product_id = %product.id))]
    pub fn add_to_cart(
        &self,
        product: &Product,
        quantity: u32,
        customization: Option<Customization>,
    ) -> Result<Vec<CartItem>, CartError> {
        if quantity == 0 {
            warn!("Rejected add of zero units");
            return Err(CartError::InvalidQuantity(0));
        }

        let mut cart = self.get_cart()?;
        match cart
            .iter_mut()
            .find(|item| item.matches(&product.id, customization.as_ref()))
        {
            Some(item) => {
                item.quantity = item.quantity.checked_add(quantity).ok_or_else(|| {
                    warn!(existing = item.quantity, "Merged quantity out of range");
                    CartError::InvalidQuantity(i64::from(item.quantity) + i64::from(quantity))
                })?;
                debug!(quantity = item.quantity, "Merged into existing line");
            }
            None => {
                cart.push(CartItem::new(product.clone(), quantity, customization));
                debug!("Appended new line");
            }
        }

        self.set_cart(&cart)?;
        info!(count = cart_count(&cart), "Added to cart");
        Ok(cart)
    }

    /// Sets the quantity of a line. Zero or negative removes the line.
    #[instrument(skip(self, customization))]
    pub fn update_cart_quantity(
        &self,
        product_id: &str,
        quantity: i64,
        customization: Option<&Customization>,
    ) -> Result<Vec<CartItem>, CartError> {
        if quantity <= 0 {
            return self.remove_from_cart(product_id, customization);
        }
        let quantity = u32::try_from(quantity).map_err(|_| CartError::InvalidQuantity(quantity))?;

        let mut cart = self.get_cart()?;
        match cart
            .iter_mut()
            .find(|item| item.matches(product_id, customization))
        {
            Some(item) => item.quantity = quantity,
            None => debug!("No matching line, cart unchanged"),
        }

        self.set_cart(&cart)?;
        Ok(cart)
    }

    /// Removes the matching line. Absent lines are ignored.
    #[instrument(skip(self, customization))]
    pub fn remove_from_cart(
        &self,
        product_id: &str,
        customization: Option<&Customization>,
    ) -> Result<Vec<CartItem>, CartError> {
        let mut cart = self.get_cart()?;
        let before = cart.len();
        cart.retain(|item| !item.matches(product_id, customization));
        debug!(removed = before - cart.len(), "Removed from cart");

        self.set_cart(&cart)?;
        Ok(cart)
    }

    #[instrument(skip(self))]
    pub fn clear_cart(&self) -> Result<(), CartError> {
        self.set_cart(&[])?;
        info!("Cart cleared");
        Ok(())
    }

    /// Σ price × quantity over the embedded product snapshots.
    pub fn get_cart_total(&self) -> Result<f64, CartError> {
        Ok(self.get_cart()?.iter().map(CartItem::line_total).sum())
    }

    /// Total units in the cart.
    pub fn get_cart_count(&self) -> Result<u32, CartError> {
        Ok(cart_count(&self.get_cart()?))
    }
}

/// Saturates at `u32::MAX`.
fn cart_count(cart: &[CartItem]) -> u32 {
    cart.iter()
        .fold(0u32, |count, item| count.saturating_add(item.quantity))
}
