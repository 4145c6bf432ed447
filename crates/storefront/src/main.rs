//! # Storefront Demo
//!
//! Walks one customer through the shop and then looks at the result from the back office:
//! 1. Log in and fill the cart, with and without a printed customization.
//! 2. Check out through the simulated gateway.
//! 3. Log in as admin, ship the order and read the analytics.
//!
//! Configuration comes from the environment (see [`storefront::config`]). Set
//! `STOREFRONT_DATA_FILE` to keep state between runs and `STOREFRONT_LATENCY_MS=0` to skip the
//! simulated delays.

use store_framework::tracing::setup_tracing;
use storefront::checkout::Checkout;
use storefront::config::StorefrontConfig;
use storefront::lifecycle::Storefront;
use storefront::model::{Customization, OrderStatus};
use storefront::payment::PaymentDetails;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = StorefrontConfig::from_env()?;
    let admin_username = config.admin.username.clone();
    let admin_password = config.admin.password.clone();
    let shop = Storefront::open(config)?;

    let span = tracing::info_span!("shopping");
    let user = async {
        let user = shop.session.login("priya@example.com", "password").await?;
        info!(user_id = %user.id, name = %user.name, "Customer logged in");

        for product in shop.catalog.featured(3)? {
            shop.cart.add_to_cart(&product, 50, None)?;
        }
        let names = Customization::new()
            .names("Priya & Arjun")
            .date("2026-12-12")
            .message("Together with their families");
        if let Some(invitation) = shop.catalog.get_product("1")? {
            shop.cart.add_to_cart(&invitation, 100, Some(names))?;
        }

        info!(
            items = shop.cart.get_cart_count()?,
            subtotal = shop.cart.get_cart_total()?,
            "Cart ready"
        );
        Ok::<_, Box<dyn std::error::Error>>(user)
    }
    .instrument(span)
    .await?;

    let summary = shop.checkout.summary()?;
    info!(
        subtotal = summary.subtotal,
        shipping = summary.shipping,
        tax = summary.tax,
        total = summary.total,
        "Order summary"
    );

    let mut shipping = Checkout::prefilled_shipping(&user);
    shipping.address = "12 Lake Road".to_string();
    shipping.city = "Udaipur".to_string();
    shipping.state = "RJ".to_string();
    shipping.zip = "313001".to_string();
    let card = PaymentDetails::new("4111 1111 1111 1111", "Priya Sharma", "12/29", "123");

    let span = tracing::info_span!("checkout");
    let receipt = match shop.checkout.place_order(shipping, &card).instrument(span).await {
        Ok(receipt) => receipt,
        Err(e) => {
            error!(error = %e, "Checkout failed");
            return Err(e.into());
        }
    };
    info!(
        order_id = %receipt.order.id,
        transaction_id = receipt.transaction_id.as_deref().unwrap_or("-"),
        "Order placed"
    );
    shop.session.logout()?;

    let span = tracing::info_span!("back_office");
    async {
        if shop
            .session
            .admin_login(&admin_username, &admin_password)
            .await?
            .is_none()
        {
            warn!("Admin credentials rejected, skipping back office");
            return Ok(());
        }

        shop.admin
            .update_order_status(&receipt.order.id, OrderStatus::Shipped)?;

        let analytics = shop.admin.get_analytics()?;
        info!(
            total_orders = analytics.total_orders,
            total_revenue = analytics.total_revenue,
            average_order_value = analytics.average_order_value,
            shipped = analytics.shipped_orders,
            "Analytics"
        );
        for popular in &analytics.popular_products {
            let name = popular.product.as_ref().map_or("(deleted)", |p| p.name.as_str());
            info!(product = name, quantity = popular.quantity, "Popular product");
        }
        for customer in shop.admin.get_all_customers()? {
            info!(
                customer = %customer.name,
                orders = shop.admin.customer_order_count(&customer.id)?,
                spent = shop.admin.customer_total_spent(&customer.id)?,
                "Customer"
            );
        }
        shop.session.logout()?;
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    info!("Demo completed successfully");
    Ok(())
}
