//! Catalog reference data types.
//!
//! Products, categories, and the site configuration are loaded wholesale
//! from static JSON at startup and never mutated afterwards. The JSON field
//! names are camelCase, matching the files under `crates/storefront/data/`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A purchasable product in the static catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Category id this product belongs to.
    pub category: String,
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub images: Vec<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<ProductColor>,
    /// Whether the product accepts a free-text customization note.
    #[serde(default)]
    pub customizable: bool,
}

impl Product {
    /// First image of the product, or an empty string if it has none.
    #[must_use]
    pub fn primary_image(&self) -> String {
        self.images.first().cloned().unwrap_or_default()
    }
}

/// A named color option with its display hex value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductColor {
    pub name: String,
    pub hex: String,
}

/// A product category shown on the home page and catalog filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
}

/// Site-wide configuration: company identity and the WhatsApp destination
/// number orders are sent to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub whatsapp_number: String,
    pub company_name: String,
    pub company_email: String,
    pub company_address: String,
    pub company_phone: String,
}
