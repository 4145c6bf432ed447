//! # Order Ledger
//!
//! Each user's orders live in their own list under `orders_<userId>`. New orders are
//! prepended, so a list reads newest-first only because every writer prepends; nothing sorts
//! it. Placed orders are never removed or reordered. Status changes happen in place through
//! the admin aggregator.

pub mod error;

pub use error::*;

use crate::keys::StoreKeys;
use crate::model::{Order, OrderStatus};
use std::sync::Arc;
use store_framework::{JsonStoreExt, KeyValueStore};
use tracing::{info, instrument};

#[derive(Clone)]
pub struct OrderLedger {
    store: Arc<dyn KeyValueStore>,
    keys: StoreKeys,
}

impl OrderLedger {
    pub fn new(store: Arc<dyn KeyValueStore>, keys: StoreKeys) -> Self {
        Self { store, keys }
    }

    /// The user's orders, newest first. Empty for unknown users.
    pub fn get_orders(&self, user_id: &str) -> Result<Vec<Order>, OrderError> {
        Ok(self.store.read_or_default(&self.keys.orders(user_id))?)
    }

    /// Prepends `order` to its owner's list.
    #[instrument(skip(self, order), fields(order_id = %order.id, user_id = %order.user_id))]
    pub fn save_order(&self, order: &Order) -> Result<(), OrderError> {
        let mut orders = self.get_orders(&order.user_id)?;
        orders.insert(0, order.clone());
        self.store.write(&self.keys.orders(&order.user_id), &orders)?;
        info!(count = orders.len(), total = order.total, "Order saved");
        Ok(())
    }

    pub fn get_order(&self, order_id: &str, user_id: &str) -> Result<Option<Order>, OrderError> {
        Ok(self
            .get_orders(user_id)?
            .into_iter()
            .find(|order| order.id == order_id))
    }

    /// Order history filtered by status; `None` keeps everything.
    pub fn orders_with_status(
        &self,
        user_id: &str,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.get_orders(user_id)?;
        if let Some(status) = status {
            orders.retain(|order| order.status == status);
        }
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ShippingAddress;
    use chrono::Utc;
    use store_framework::MemoryStore;

    fn ledger() -> OrderLedger {
        OrderLedger::new(Arc::new(MemoryStore::new()), StoreKeys::default())
    }

    fn order(id: &str, user_id: &str, status: OrderStatus) -> Order {
        Order::new(
            id,
            user_id,
            Vec::new(),
            10.0,
            status,
            ShippingAddress::default(),
            Utc::now(),
        )
    }

    #[test]
    fn test_save_prepends() {
        let ledger = ledger();
        ledger.save_order(&order("a", "u1", OrderStatus::Processing)).unwrap();
        ledger.save_order(&order("b", "u1", OrderStatus::Processing)).unwrap();

        let orders = ledger.get_orders("u1").unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, "b");
        assert!(ledger.get_orders("u2").unwrap().is_empty());
    }

    #[test]
    fn test_get_order_is_scoped_to_user() {
        let ledger = ledger();
        ledger.save_order(&order("a", "u1", OrderStatus::Processing)).unwrap();

        assert!(ledger.get_order("a", "u1").unwrap().is_some());
        assert!(ledger.get_order("a", "u2").unwrap().is_none());
        assert!(ledger.get_order("zzz", "u1").unwrap().is_none());
    }

    #[test]
    fn test_status_filter() {
        let ledger = ledger();
        ledger.save_order(&order("a", "u1", OrderStatus::Delivered)).unwrap();
        ledger.save_order(&order("b", "u1", OrderStatus::Processing)).unwrap();

        let delivered = ledger
            .orders_with_status("u1", Some(OrderStatus::Delivered))
            .unwrap();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].id, "a");
        assert_eq!(ledger.orders_with_status("u1", None).unwrap().len(), 2);
    }
}
