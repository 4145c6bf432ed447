use crate::model::Category;
use serde::{Deserialize, Serialize};

/// Store-wide configuration edited from the admin settings page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub shipping_rate: f64,
    pub tax_rate: f64,
    pub categories: Vec<String>,
    pub featured_product_ids: Vec<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            shipping_rate: 500.0,
            tax_rate: 0.18,
            categories: Category::ALL
                .iter()
                .map(|category| category.slug().to_string())
                .collect(),
            featured_product_ids: Vec::new(),
        }
    }
}
