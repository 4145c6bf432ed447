use std::sync::Arc;
use std::time::Duration;
use store_framework::mock::ScriptedStore;
use store_framework::{KeyValueStore, MemoryStore};
use storefront::checkout::{CheckoutError, OrderSummary};
use storefront::config::{PricingRules, StorefrontConfig};
use storefront::keys::StoreKeys;
use storefront::lifecycle::Storefront;
use storefront::model::{Customization, OrderStatus, ShippingAddress};
use storefront::payment::mock::MockPaymentGateway;
use storefront::payment::{PaymentDetails, PaymentError, PaymentResult};
use storefront::session::SimulatedAuth;
use storefront::signals::StorefrontSignal;

fn config() -> StorefrontConfig {
    StorefrontConfig::default().with_latency(Duration::ZERO)
}

fn shop_with(store: Arc<dyn KeyValueStore>, gateway: Arc<MockPaymentGateway>) -> Storefront {
    let config = config();
    Storefront::with_parts(
        store,
        Arc::new(SimulatedAuth::new(Duration::ZERO, config.admin.clone())),
        gateway,
        &config,
    )
}

fn card() -> PaymentDetails {
    PaymentDetails::new("4111 1111 1111 1111", "Priya Sharma", "12/99", "123")
}

fn shipping() -> ShippingAddress {
    ShippingAddress {
        name: "Priya Sharma".into(),
        address: "12 Lake Road".into(),
        city: "Udaipur".into(),
        state: "RJ".into(),
        zip: "313001".into(),
        country: "India".into(),
    }
}

async fn fill_cart(shop: &Storefront) {
    shop.session.login("priya@example.com", "pw").await.unwrap();
    let invitation = shop.catalog.get_product("1").unwrap().unwrap();
    let thanks = shop.catalog.get_product("7").unwrap().unwrap();
    shop.cart
        .add_to_cart(&invitation, 5, Some(Customization::new().names("Priya & Arjun")))
        .unwrap();
    shop.cart.add_to_cart(&thanks, 2, None).unwrap();
}

#[tokio::test]
async fn test_successful_checkout() {
    let gateway = Arc::new(MockPaymentGateway::new());
    gateway.expect_payment().return_result(PaymentResult::approved("TXN-ABC123XYZ"));
    let shop = shop_with(Arc::new(MemoryStore::new()), gateway.clone());
    fill_cart(&shop).await;
    let cart_before = shop.cart.get_cart().unwrap();
    let mut signals = shop.signals.subscribe();

    let receipt = shop.checkout.place_order(shipping(), &card()).await.unwrap();

    // 5 x 6.99 + 2 x 2.99 = 40.93, under the free-shipping threshold
    let expected = OrderSummary::from_subtotal(40.93, &PricingRules::default());
    assert!((receipt.order.total - expected.total).abs() < 1e-9);
    assert_eq!(gateway.charged_amounts(), vec![receipt.order.total]);
    assert_eq!(receipt.transaction_id.as_deref(), Some("TXN-ABC123XYZ"));

    let user = shop.session.get_stored_user().unwrap().unwrap();
    assert_eq!(receipt.order.user_id, user.id);
    assert_eq!(receipt.order.status, OrderStatus::Processing);
    assert_eq!(receipt.order.items, cart_before);
    assert_eq!(receipt.order.created_at, receipt.order.updated_at);
    assert_eq!(receipt.order.id.len(), 9);

    let saved = shop.orders.get_orders(&user.id).unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].id, receipt.order.id);
    assert_eq!(saved[0].shipping_address, shipping());
    assert!(shop.cart.get_cart().unwrap().is_empty());
    assert_eq!(signals.recv().await.unwrap(), StorefrontSignal::CartChanged);
    gateway.verify();
}

#[tokio::test]
async fn test_decline_writes_nothing() {
    let gateway = Arc::new(MockPaymentGateway::new());
    gateway.expect_payment().return_result(PaymentResult::declined("Invalid card number"));
    let shop = shop_with(Arc::new(MemoryStore::new()), gateway.clone());
    fill_cart(&shop).await;

    let result = shop.checkout.place_order(shipping(), &card()).await;
    match result {
        Err(CheckoutError::PaymentDeclined(message)) => assert_eq!(message, "Invalid card number"),
        other => panic!("Expected PaymentDeclined, got {:?}", other),
    }

    let user = shop.session.get_stored_user().unwrap().unwrap();
    assert!(shop.orders.get_orders(&user.id).unwrap().is_empty());
    assert_eq!(shop.cart.get_cart().unwrap().len(), 2);
    gateway.verify();
}

#[tokio::test]
async fn test_decline_without_message_uses_generic_text() {
    let gateway = Arc::new(MockPaymentGateway::new());
    gateway.expect_payment().return_result(PaymentResult {
        success: false,
        transaction_id: None,
        error: None,
    });
    let shop = shop_with(Arc::new(MemoryStore::new()), gateway.clone());
    fill_cart(&shop).await;

    let result = shop.checkout.place_order(shipping(), &card()).await;
    assert!(matches!(result, Err(CheckoutError::PaymentDeclined(m)) if m.starts_with("Please check")));
}

#[tokio::test]
async fn test_gateway_failure_is_an_error() {
    let gateway = Arc::new(MockPaymentGateway::new());
    gateway
        .expect_payment()
        .return_err(PaymentError::Gateway("connection reset".into()));
    let shop = shop_with(Arc::new(MemoryStore::new()), gateway.clone());
    fill_cart(&shop).await;

    let result = shop.checkout.place_order(shipping(), &card()).await;
    assert!(matches!(result, Err(CheckoutError::Gateway(_))));
    assert_eq!(shop.cart.get_cart().unwrap().len(), 2);
}

#[tokio::test]
async fn test_checkout_requires_session_and_items() {
    let gateway = Arc::new(MockPaymentGateway::new());
    let shop = shop_with(Arc::new(MemoryStore::new()), gateway.clone());

    let result = shop.checkout.place_order(shipping(), &card()).await;
    assert!(matches!(result, Err(CheckoutError::NotLoggedIn)));

    shop.session.login("priya@example.com", "pw").await.unwrap();
    let result = shop.checkout.place_order(shipping(), &card()).await;
    assert!(matches!(result, Err(CheckoutError::EmptyCart)));

    assert!(gateway.charged_amounts().is_empty());
    gateway.verify();
}

/// The order write and the cart clear are independent; a failed clear leaves both in place.
#[tokio::test]
async fn test_failed_cart_clear_keeps_saved_order() {
    let store = ScriptedStore::new();
    let gateway = Arc::new(MockPaymentGateway::new());
    gateway.expect_payment().return_result(PaymentResult::approved("TXN-1"));
    let shop = shop_with(Arc::new(store.clone()), gateway);
    fill_cart(&shop).await;

    store.expect_write(StoreKeys::default().cart()).fail();
    let result = shop.checkout.place_order(shipping(), &card()).await;

    let order_id = match result {
        Err(CheckoutError::CartNotCleared { order_id, .. }) => order_id,
        other => panic!("Expected CartNotCleared, got {:?}", other),
    };
    let user = shop.session.get_stored_user().unwrap().unwrap();
    let saved = shop.orders.get_order(&order_id, &user.id).unwrap();
    assert!(saved.is_some());
    assert_eq!(shop.cart.get_cart().unwrap().len(), 2);
    store.verify();
}

#[tokio::test]
async fn test_state_survives_reopening_data_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = config().with_data_file(dir.path().join("shop.json"));

    let (user_id, order_id) = {
        let shop = Storefront::open(config.clone()).unwrap();
        fill_cart(&shop).await;
        let receipt = shop.checkout.place_order(shipping(), &card()).await.unwrap();
        assert!(receipt.transaction_id.unwrap().starts_with("TXN-"));
        (receipt.order.user_id, receipt.order.id)
    };

    let shop = Storefront::open(config.clone()).unwrap();
    let user = shop.session.get_stored_user().unwrap().unwrap();
    assert_eq!(user.id, user_id);
    assert!(shop.cart.get_cart().unwrap().is_empty());
    assert!(shop.orders.get_order(&order_id, &user_id).unwrap().is_some());

    assert!(shop.admin.update_order_status(&order_id, OrderStatus::Delivered).unwrap());
    let reopened = Storefront::open(config).unwrap();
    let analytics = reopened.admin.get_analytics().unwrap();
    assert_eq!(analytics.delivered_orders, 1);
    assert_eq!(analytics.popular_products[0].product_id, "1");
}
