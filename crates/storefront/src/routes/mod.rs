//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (categories + featured products)
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /catalogo               - Product listing (?q= search, ?categoria= filter)
//! GET  /producto/{id}          - Product detail (404 page on unknown id)
//!
//! # Company
//! GET  /nosotros               - About page with the company contact details
//!
//! # Cart (HTMX fragments)
//! GET  /carrito                - Cart page with summary and checkout form
//! POST /carrito/add            - Add to cart (returns count fragment, triggers cart-updated)
//! POST /carrito/update         - Change quantity (returns cart_items fragment)
//! POST /carrito/remove         - Remove item (returns cart_items fragment)
//! GET  /carrito/count          - Cart count badge (fragment)
//!
//! # Checkout
//! POST /checkout               - Validate and submit; redirects to the WhatsApp deep link
//! ```

pub mod about;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Catalog
        .route("/catalogo", get(catalog::index))
        .route("/producto/{id}", get(products::show))
        // Company
        .route("/nosotros", get(about::show))
        // Cart routes
        .nest("/carrito", cart_routes())
        // Checkout submission
        .route("/checkout", post(checkout::submit))
}
