//! Application state shared across handlers.

use std::sync::Arc;

use crate::cart::CartHandle;
use crate::catalog::{Catalog, CatalogError};
use crate::config::StorefrontConfig;
use crate::storage::CartStorage;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Owns the catalog and the cart container;
/// both are constructed explicitly here, not at module load.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    cart: CartHandle,
}

impl AppState {
    /// Create the application state: load the catalog and hydrate the cart
    /// from its persisted record.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the reference data cannot be loaded. Cart
    /// hydration never fails (absent or corrupt records yield the empty
    /// cart).
    pub fn new(config: StorefrontConfig) -> Result<Self, CatalogError> {
        let catalog = Catalog::load(&config.data_dir)?;
        let cart = CartHandle::hydrate(CartStorage::new(&config.state_dir));
        Ok(Self::with_parts(config, catalog, cart))
    }

    /// Assemble state from already-built parts (used by tests to inject an
    /// in-memory cart).
    #[must_use]
    pub fn with_parts(config: StorefrontConfig, catalog: Catalog, cart: CartHandle) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the static catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the cart container.
    #[must_use]
    pub fn cart(&self) -> &CartHandle {
        &self.inner.cart
    }
}
