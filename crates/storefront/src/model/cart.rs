use crate::model::Product;
use serde::{Deserialize, Serialize};

/// Personalization printed on a card. Part of a line item's identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Customization {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(mut self, names: impl Into<String>) -> Self {
        self.names = Some(names.into());
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Structural equality of two optional customizations, compared field by field.
///
/// An absent customization never matches a present one, even an empty one.
pub fn same_customization(a: Option<&Customization>, b: Option<&Customization>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.names == b.names && a.date == b.date && a.message == b.message,
        _ => false,
    }
}

/// A cart line: an embedded product snapshot, a quantity and an optional customization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customization: Option<Customization>,
}

impl CartItem {
    pub fn new(product: Product, quantity: u32, customization: Option<Customization>) -> Self {
        Self {
            product,
            quantity,
            customization,
        }
    }

    /// True when this line has the identity `(product_id, customization)`.
    pub fn matches(&self, product_id: &str, customization: Option<&Customization>) -> bool {
        self.product.id == product_id
            && same_customization(self.customization.as_ref(), customization)
    }

    /// Price of the line, from the embedded product snapshot.
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}
