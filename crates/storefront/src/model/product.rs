//! Catalog products.
//!
//! Products are persisted as a single array under the products key; carts and orders embed a
//! full copy of the product at the time it was added, never a reference.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Product category, persisted as its kebab-case slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Invitation,
    SaveTheDate,
    ThankYou,
    Rsvp,
    Menu,
    Program,
}

impl Category {
    /// Every category, in storefront display order.
    pub const ALL: [Category; 6] = [
        Category::Invitation,
        Category::SaveTheDate,
        Category::ThankYou,
        Category::Rsvp,
        Category::Menu,
        Category::Program,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Category::Invitation => "invitation",
            Category::SaveTheDate => "save-the-date",
            Category::ThankYou => "thank-you",
            Category::Rsvp => "rsvp",
            Category::Menu => "menu",
            Category::Program => "program",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.slug() == s)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// Represents a stationery product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: Category,
    pub featured: bool,
    pub customizable: bool,
    pub stock: u32,
}

impl Product {
    /// Creates a customizable, non-featured product with no description or image.
    ///
    /// # Arguments
    /// * `id` - Unique identifier
    /// * `name` - Display name
    /// * `category` - Catalog category
    /// * `price` - Unit price
    /// * `stock` - Units available
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        price: f64,
        stock: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            image: String::new(),
            category,
            featured: false,
            customizable: true,
            stock,
        }
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }
}

/// Partial product edit. Present fields overwrite, absent fields are kept; the id never changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub category: Option<Category>,
    pub featured: Option<bool>,
    pub customizable: Option<bool>,
    pub stock: Option<u32>,
}

impl ProductUpdate {
    /// Shallow field overwrite onto `product`.
    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(featured) = self.featured {
            product.featured = featured;
        }
        if let Some(customizable) = self.customizable {
            product.customizable = customizable;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
    }
}
