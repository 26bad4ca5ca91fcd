//! Static catalog reference data.
//!
//! Products, categories, and the site configuration are loaded once at
//! startup from JSON files in the data directory and held in memory for the
//! life of the process. The storefront never mutates them.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use wakehealth_core::types::{Category, Product, SiteConfig};

/// Catalog loading errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error reading {0}: {1}")]
    Io(String, String),
    #[error("Parse error in {0}: {1}")]
    Parse(String, String),
}

/// In-memory catalog shared across handlers.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<Vec<Product>>,
    by_id: Arc<HashMap<String, usize>>,
    categories: Arc<Vec<Category>>,
    site: Arc<SiteConfig>,
}

impl Catalog {
    /// Load the catalog from `products.json`, `categories.json`, and
    /// `config.json` inside `data_dir`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if any file is missing or fails to parse.
    /// Reference data is a startup requirement, not a degraded mode.
    pub fn load(data_dir: &Path) -> Result<Self, CatalogError> {
        let products: Vec<Product> = load_json(&data_dir.join("products.json"))?;
        let categories: Vec<Category> = load_json(&data_dir.join("categories.json"))?;
        let site: SiteConfig = load_json(&data_dir.join("config.json"))?;

        let by_id = products
            .iter()
            .enumerate()
            .map(|(index, product)| (product.id.clone(), index))
            .collect();

        tracing::info!(
            products = products.len(),
            categories = categories.len(),
            "Catalog loaded"
        );

        Ok(Self {
            products: Arc::new(products),
            by_id: Arc::new(by_id),
            categories: Arc::new(categories),
            site: Arc::new(site),
        })
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories, in display order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Site configuration (company identity, WhatsApp destination number).
    #[must_use]
    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.by_id.get(id).and_then(|&index| self.products.get(index))
    }

    /// Look up a category by id.
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Products matching a name search and/or a category id.
    ///
    /// The search is a case-insensitive substring match on the product name;
    /// the category filter is an exact id match. Either may be absent.
    #[must_use]
    pub fn filter(&self, query: Option<&str>, category: Option<&str>) -> Vec<&Product> {
        let needle = query.map(str::to_lowercase);
        self.products
            .iter()
            .filter(|product| {
                let matches_search = needle
                    .as_deref()
                    .is_none_or(|q| product.name.to_lowercase().contains(q));
                let matches_category =
                    category.is_none_or(|c| product.category == c);
                matches_search && matches_category
            })
            .collect()
    }

    /// The first `n` products, shown as featured on the home page.
    #[must_use]
    pub fn featured(&self, n: usize) -> &[Product] {
        self.products.get(..n.min(self.products.len())).unwrap_or(&[])
    }
}

/// Read and parse one JSON data file.
fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let name = path.display().to_string();
    let contents =
        std::fs::read_to_string(path).map_err(|e| CatalogError::Io(name.clone(), e.to_string()))?;
    serde_json::from_str(&contents).map_err(|e| CatalogError::Parse(name, e.to_string()))
}
