//! # Checkout
//!
//! Turns the current cart into an order:
//!
//! 1. Require a session and a non-empty cart
//! 2. Price the cart with [`PricingRules`]
//! 3. Charge the total through the [`PaymentGateway`]; a decline stops here with nothing written
//! 4. Save the order (status `processing`) to the user's ledger
//! 5. Clear the cart
//!
//! Steps 4 and 5 are separate writes with no rollback. If clearing the cart fails the order
//! stays saved and [`CheckoutError::CartNotCleared`] carries its id.

pub mod error;

pub use error::*;

use crate::cart::CartManager;
use crate::config::PricingRules;
use crate::ids::random_id;
use crate::model::{CartItem, Order, OrderStatus, ShippingAddress, User};
use crate::orders::OrderLedger;
use crate::payment::{PaymentDetails, PaymentGateway};
use crate::session::SessionManager;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

const DEFAULT_COUNTRY: &str = "United States";
const GENERIC_DECLINE: &str = "Please check your payment details and try again.";

/// Price breakdown shown beside the checkout form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderSummary {
    pub subtotal: f64,
    pub shipping: f64,
    pub tax: f64,
    pub total: f64,
}

impl OrderSummary {
    pub fn from_subtotal(subtotal: f64, pricing: &PricingRules) -> Self {
        let shipping = if subtotal > pricing.free_shipping_over {
            0.0
        } else {
            pricing.flat_shipping
        };
        let tax = subtotal * pricing.tax_rate;
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    pub fn for_items(items: &[CartItem], pricing: &PricingRules) -> Self {
        Self::from_subtotal(items.iter().map(CartItem::line_total).sum(), pricing)
    }

    pub fn free_shipping(&self) -> bool {
        self.shipping == 0.0
    }
}

/// A placed order and the gateway's reference for the charge.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub order: Order,
    pub transaction_id: Option<String>,
}

#[derive(Clone)]
pub struct Checkout {
    cart: CartManager,
    session: SessionManager,
    ledger: OrderLedger,
    gateway: Arc<dyn PaymentGateway>,
    pricing: PricingRules,
}

impl Checkout {
    pub fn new(
        cart: CartManager,
        session: SessionManager,
        ledger: OrderLedger,
        gateway: Arc<dyn PaymentGateway>,
        pricing: PricingRules,
    ) -> Self {
        Self {
            cart,
            session,
            ledger,
            gateway,
            pricing,
        }
    }

    /// Pricing for the current cart.
    pub fn summary(&self) -> Result<OrderSummary, CheckoutError> {
        Ok(OrderSummary::for_items(&self.cart.get_cart()?, &self.pricing))
    }

    /// Shipping form defaults for the signed-in user.
    pub fn prefilled_shipping(user: &User) -> ShippingAddress {
        ShippingAddress {
            name: user.name.clone(),
            country: DEFAULT_COUNTRY.to_string(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, shipping, payment))]
    pub async fn place_order(
        &self,
        shipping: ShippingAddress,
        payment: &PaymentDetails,
    ) -> Result<Receipt, CheckoutError> {
        let user = self
            .session
            .get_stored_user()?
            .ok_or(CheckoutError::NotLoggedIn)?;
        let items = self.cart.get_cart()?;
        if items.is_empty() {
            warn!(user_id = %user.id, "Checkout with empty cart");
            return Err(CheckoutError::EmptyCart);
        }

        let summary = OrderSummary::for_items(&items, &self.pricing);
        debug!(?summary, "Charging");

        let result = self.gateway.process_payment(summary.total, payment).await?;
        if !result.success {
            let message = result.error.unwrap_or_else(|| GENERIC_DECLINE.to_string());
            warn!(user_id = %user.id, %message, "Payment declined");
            return Err(CheckoutError::PaymentDeclined(message));
        }

        let order = Order::new(
            random_id(),
            user.id,
            items,
            summary.total,
            OrderStatus::Processing,
            shipping,
            Utc::now(),
        );
        self.ledger.save_order(&order)?;

        if let Err(source) = self.cart.clear_cart() {
            warn!(order_id = %order.id, "Order saved but cart not cleared");
            return Err(CheckoutError::CartNotCleared {
                order_id: order.id,
                source,
            });
        }

        info!(order_id = %order.id, total = order.total, "Order placed");
        Ok(Receipt {
            order,
            transaction_id: result.transaction_id,
        })
    }
}
