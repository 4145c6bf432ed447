use chrono::{TimeZone, Utc};
use std::sync::Arc;
use std::time::Duration;
use store_framework::{KeyValueStore, MemoryStore};
use storefront::config::StorefrontConfig;
use storefront::lifecycle::Storefront;
use storefront::model::{
    Customization, Order, OrderStatus, Product, ProductUpdate, ShippingAddress,
};
use storefront::payment::{
    validate_expiry, validate_expiry_at, PaymentDetails, PaymentGateway, SimulatedGateway,
};
use storefront::session::SimulatedAuth;

fn shop() -> Storefront {
    let config = StorefrontConfig::default().with_latency(Duration::ZERO);
    Storefront::with_parts(
        Arc::new(MemoryStore::new()),
        Arc::new(SimulatedAuth::new(Duration::ZERO, config.admin.clone())),
        Arc::new(SimulatedGateway::new(Duration::ZERO)),
        &config,
    )
}

fn product(shop: &Storefront, id: &str) -> Product {
    shop.catalog.get_product(id).unwrap().expect("seed product missing")
}

fn place(shop: &Storefront, id: &str, user_id: &str, items: Vec<storefront::model::CartItem>) -> Order {
    let total = items.iter().map(|i| i.line_total()).sum();
    let order = Order::new(
        id,
        user_id,
        items,
        total,
        OrderStatus::Processing,
        ShippingAddress {
            name: user_id.to_string(),
            ..Default::default()
        },
        Utc::now(),
    );
    shop.orders.save_order(&order).unwrap();
    order
}

/// Empty cart, add two units, count and total follow.
#[test]
fn test_scenario_add_to_empty_cart() {
    let shop = shop();
    let p1 = product(&shop, "1");
    assert_eq!(shop.cart.get_cart_count().unwrap(), 0);

    shop.cart.add_to_cart(&p1, 2, None).unwrap();

    assert_eq!(shop.cart.get_cart_count().unwrap(), 2);
    assert!((shop.cart.get_cart_total().unwrap() - 2.0 * p1.price).abs() < 1e-9);
}

/// The gateway approves card details the form validator would reject.
#[tokio::test]
async fn test_scenario_payment_ignores_expiry_validity() {
    let gateway = SimulatedGateway::new(Duration::ZERO);

    let far_future = PaymentDetails::new("4111111111111111", "A", "12/99", "123");
    assert!(validate_expiry(&far_future.expiry));
    assert!(gateway.process_payment(100.0, &far_future).await.unwrap().success);

    let expired = PaymentDetails::new("4111111111111111", "A", "01/20", "123");
    let now = Utc.with_ymd_and_hms(2026, 10, 18, 0, 0, 0).unwrap();
    assert!(!validate_expiry_at(&expired.expiry, now));
    let result = gateway.process_payment(100.0, &expired).await.unwrap();
    assert!(result.success);
    assert!(result.transaction_id.is_some());
}

/// Shipping one order rewrites only its owner's list and only its status and timestamp.
#[test]
fn test_scenario_status_update_is_isolated() {
    let shop = shop();
    let keys = storefront::keys::StoreKeys::default();
    let a1 = place(&shop, "a1", "alice", vec![]);
    place(&shop, "a2", "alice", vec![]);
    place(&shop, "b1", "bob", vec![]);
    let bob_before = shop.store().get(&keys.orders("bob")).unwrap();

    std::thread::sleep(Duration::from_millis(5));
    assert!(shop.admin.update_order_status("a1", OrderStatus::Shipped).unwrap());

    let updated = shop.orders.get_order("a1", "alice").unwrap().unwrap();
    assert_eq!(updated.status, OrderStatus::Shipped);
    assert!(updated.updated_at > a1.updated_at);
    assert_eq!(updated.created_at, a1.created_at);
    assert_eq!(updated.items, a1.items);
    assert_eq!(updated.total, a1.total);

    let sibling = shop.orders.get_order("a2", "alice").unwrap().unwrap();
    assert_eq!(sibling.status, OrderStatus::Processing);
    assert_eq!(shop.store().get(&keys.orders("bob")).unwrap(), bob_before);

    let alice: Vec<String> = shop
        .orders
        .get_orders("alice")
        .unwrap()
        .into_iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(alice, vec!["a2", "a1"]);
}

/// Deleting a product does not touch orders that embed it.
#[test]
fn test_scenario_delete_product_keeps_order_snapshot() {
    let shop = shop();
    let peacock = product(&shop, "3");
    shop.cart.add_to_cart(&peacock, 4, None).unwrap();
    let order = place(&shop, "o1", "alice", shop.cart.get_cart().unwrap());

    assert!(shop.admin.delete_product("3").unwrap());

    let products = shop.admin.get_all_products().unwrap();
    assert_eq!(products.len(), 11);
    assert!(products.iter().all(|p| p.id != "3"));

    let stored = shop.orders.get_order("o1", "alice").unwrap().unwrap();
    assert_eq!(stored.items[0].product, peacock);
    assert_eq!(stored.items, order.items);
}

#[test]
fn test_repeated_adds_merge_into_one_line() {
    let shop = shop();
    let custom = Some(Customization::new().names("Meera & Kabir").date("2026-02-14"));
    for p in ["1", "5", "12"] {
        let product = product(&shop, p);
        shop.cart.add_to_cart(&product, 3, custom.clone()).unwrap();
        shop.cart.add_to_cart(&product, 4, custom.clone()).unwrap();
    }

    let cart = shop.cart.get_cart().unwrap();
    assert_eq!(cart.len(), 3);
    assert!(cart.iter().all(|item| item.quantity == 7));
}

#[test]
fn test_remove_is_idempotent() {
    let shop = shop();
    shop.cart.add_to_cart(&product(&shop, "2"), 1, None).unwrap();
    let before = shop.cart.get_cart().unwrap();

    let first = shop.cart.remove_from_cart("9", None).unwrap();
    let second = shop.cart.remove_from_cart("9", None).unwrap();
    assert_eq!(first, before);
    assert_eq!(second, before);
}

#[test]
fn test_zero_quantity_update_equals_remove() {
    let custom = Customization::new().message("With love");
    let build = || {
        let shop = shop();
        shop.cart.add_to_cart(&product(&shop, "1"), 2, None).unwrap();
        shop.cart.add_to_cart(&product(&shop, "1"), 2, Some(custom.clone())).unwrap();
        shop.cart.add_to_cart(&product(&shop, "7"), 1, None).unwrap();
        shop
    };

    let updated = build().cart.update_cart_quantity("1", 0, Some(&custom)).unwrap();
    let removed = build().cart.remove_from_cart("1", Some(&custom)).unwrap();
    assert_eq!(updated, removed);
    assert_eq!(updated.len(), 2);
}

#[test]
fn test_cart_total_uses_snapshot_after_price_change() {
    let shop = shop();
    let menu = product(&shop, "9");
    shop.cart.add_to_cart(&menu, 10, None).unwrap();

    let update = ProductUpdate {
        price: Some(99.0),
        ..Default::default()
    };
    assert!(shop.admin.update_product("9", update).unwrap());
    assert_eq!(product(&shop, "9").price, 99.0);

    assert!((shop.cart.get_cart_total().unwrap() - 44.9).abs() < 1e-9);
}

#[test]
fn test_save_order_prepends_exactly_one() {
    let shop = shop();
    place(&shop, "o1", "alice", vec![]);
    let before = shop.orders.get_orders("alice").unwrap().len();

    place(&shop, "o2", "alice", vec![]);
    let after = shop.orders.get_orders("alice").unwrap();
    assert_eq!(after.len(), before + 1);
    assert_eq!(after[0].id, "o2");
}

#[test]
fn test_all_orders_descending_across_users() {
    let shop = shop();
    let base = Utc::now();
    let users = ["alice", "bob", "chitra"];
    for i in 0..9i64 {
        let order = Order::new(
            format!("o{}", i),
            users[(i * 7 % 3) as usize],
            vec![],
            1.0,
            OrderStatus::Pending,
            ShippingAddress::default(),
            base + chrono::Duration::seconds((i * 5) % 9),
        );
        shop.orders.save_order(&order).unwrap();
    }

    let all = shop.admin.get_all_orders().unwrap();
    assert_eq!(all.len(), 9);
    assert!(all.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

#[test]
fn test_analytics_without_orders() {
    let analytics = shop().admin.get_analytics().unwrap();
    assert_eq!(analytics.total_orders, 0);
    assert_eq!(analytics.average_order_value, 0.0);
    assert!(analytics.recent_orders.is_empty());
}
