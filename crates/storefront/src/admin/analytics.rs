//! Dashboard figures computed over every order.

use crate::model::{Order, OrderStatus, Product};
use serde::Serialize;

const POPULAR_LIMIT: usize = 5;
const RECENT_LIMIT: usize = 10;

/// A product ranked by units sold.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularProduct {
    pub product_id: String,
    /// Current catalog entry; `None` once the product has been deleted.
    pub product: Option<Product>,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    /// Sum of totals of orders that are not cancelled
    pub total_revenue: f64,
    pub total_orders: usize,
    pub pending_orders: usize,
    pub processing_orders: usize,
    pub shipped_orders: usize,
    pub delivered_orders: usize,
    pub cancelled_orders: usize,
    pub popular_products: Vec<PopularProduct>,
    pub recent_orders: Vec<Order>,
    /// `total_revenue / total_orders`, where the denominator includes cancelled orders; 0 without orders
    pub average_order_value: f64,
}

impl Analytics {
    /// `orders` must already be sorted newest first.
    pub fn compute(orders: &[Order], catalog: &[Product]) -> Self {
        let count = |status: OrderStatus| orders.iter().filter(|o| o.status == status).count();

        let total_revenue: f64 = orders
            .iter()
            .filter(|o| o.status != OrderStatus::Cancelled)
            .map(|o| o.total)
            .sum();
        let total_orders = orders.len();
        let average_order_value = if total_orders > 0 {
            total_revenue / total_orders as f64
        } else {
            0.0
        };

        Self {
            total_revenue,
            total_orders,
            pending_orders: count(OrderStatus::Pending),
            processing_orders: count(OrderStatus::Processing),
            shipped_orders: count(OrderStatus::Shipped),
            delivered_orders: count(OrderStatus::Delivered),
            cancelled_orders: count(OrderStatus::Cancelled),
            popular_products: popular_products(orders, catalog),
            recent_orders: orders.iter().take(RECENT_LIMIT).cloned().collect(),
            average_order_value,
        }
    }
}

/// Top products by cumulative quantity across all orders, cancelled ones included.
///
/// Ties keep the order in which products were first encountered.
fn popular_products(orders: &[Order], catalog: &[Product]) -> Vec<PopularProduct> {
    let mut sales: Vec<(String, u32)> = Vec::new();
    for item in orders.iter().flat_map(|order| &order.items) {
        match sales.iter_mut().find(|(id, _)| *id == item.product.id) {
            Some((_, quantity)) => *quantity += item.quantity,
            None => sales.push((item.product.id.clone(), item.quantity)),
        }
    }

    sales.sort_by(|(_, a), (_, b)| b.cmp(a));
    sales
        .into_iter()
        .take(POPULAR_LIMIT)
        .map(|(product_id, quantity)| PopularProduct {
            product: catalog.iter().find(|p| p.id == product_id).cloned(),
            product_id,
            quantity,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_products;
    use crate::model::{CartItem, ShippingAddress};
    use chrono::{Duration, Utc};

    fn order(id: &str, status: OrderStatus, total: f64, lines: &[(&str, u32)]) -> Order {
        let catalog = seed_products();
        let items = lines
            .iter()
            .map(|(product_id, quantity)| {
                let product = catalog.iter().find(|p| p.id == *product_id).unwrap().clone();
                CartItem::new(product, *quantity, None)
            })
            .collect();
        Order::new(id, "u1", items, total, status, ShippingAddress::default(), Utc::now())
    }

    #[test]
    fn test_no_orders_means_zero_average() {
        let analytics = Analytics::compute(&[], &seed_products());
        assert_eq!(analytics.total_orders, 0);
        assert_eq!(analytics.total_revenue, 0.0);
        assert_eq!(analytics.average_order_value, 0.0);
        assert!(analytics.popular_products.is_empty());
    }

    #[test]
    fn test_cancelled_orders_are_excluded_from_revenue_only() {
        let orders = vec![
            order("a", OrderStatus::Processing, 30.0, &[]),
            order("b", OrderStatus::Cancelled, 70.0, &[]),
            order("c", OrderStatus::Delivered, 30.0, &[]),
        ];
        let analytics = Analytics::compute(&orders, &seed_products());

        assert_eq!(analytics.total_revenue, 60.0);
        assert_eq!(analytics.total_orders, 3);
        assert_eq!(analytics.cancelled_orders, 1);
        assert_eq!(analytics.delivered_orders, 1);
        assert!((analytics.average_order_value - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_popular_products_ranking() {
        let orders = vec![
            order("a", OrderStatus::Processing, 1.0, &[("7", 3), ("2", 5)]),
            order("b", OrderStatus::Processing, 1.0, &[("1", 2), ("7", 2), ("9", 1)]),
            order("c", OrderStatus::Processing, 1.0, &[("4", 1), ("5", 1), ("12", 1)]),
        ];
        let popular = Analytics::compute(&orders, &seed_products()).popular_products;

        let ranking: Vec<(&str, u32)> = popular
            .iter()
            .map(|p| (p.product_id.as_str(), p.quantity))
            .collect();
        assert_eq!(ranking, vec![("7", 5), ("2", 5), ("1", 2), ("9", 1), ("4", 1)]);
        assert_eq!(popular[0].product.as_ref().map(|p| p.name.as_str()), Some("Namaste Thank You Cards"));
    }

    #[test]
    fn test_deleted_product_has_no_catalog_entry() {
        let orders = vec![order("a", OrderStatus::Shipped, 1.0, &[("3", 4)])];
        let catalog: Vec<Product> = seed_products().into_iter().filter(|p| p.id != "3").collect();

        let popular = Analytics::compute(&orders, &catalog).popular_products;
        assert_eq!(popular[0].product_id, "3");
        assert_eq!(popular[0].product, None);
    }

    #[test]
    fn test_recent_orders_are_capped() {
        let now = Utc::now();
        let orders: Vec<Order> = (0..12)
            .map(|i| {
                let mut o = order(&i.to_string(), OrderStatus::Pending, 1.0, &[]);
                o.created_at = now - Duration::minutes(i);
                o
            })
            .collect();
        let analytics = Analytics::compute(&orders, &[]);
        assert_eq!(analytics.recent_orders.len(), 10);
        assert_eq!(analytics.recent_orders[0].id, "0");
        assert_eq!(analytics.pending_orders, 12);
    }
}
