//! Identifiers for users, orders, payment transactions and admin-created products.

use chrono::Utc;
use rand::Rng;

const ID_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Nine lowercase base-36 characters, e.g. `k3j9x0a1b`.
pub fn random_id() -> String {
    let mut rng = rand::rng();
    (0..ID_LEN)
        .map(|_| char::from(BASE36[rng.random_range(0..BASE36.len())]))
        .collect()
}

/// Synthetic payment reference, `TXN-` followed by nine uppercase base-36 characters.
pub fn transaction_id() -> String {
    format!("TXN-{}", random_id().to_ascii_uppercase())
}

/// Id for a product created from the admin page: the current Unix time in milliseconds.
pub fn product_id() -> String {
    Utc::now().timestamp_millis().to_string()
}
