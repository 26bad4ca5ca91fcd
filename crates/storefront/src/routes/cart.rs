//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! Mutations address entries by their identity key (product id, size,
//! color); a miss is a silent no-op, never an error.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;
use wakehealth_core::cart::{Cart, CartItem, CustomerDraft};
use wakehealth_core::types::price;

use crate::error::AppError;
use crate::filters;
use crate::state::AppState;

use super::checkout::CheckoutErrors;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub product_id: String,
    pub name: String,
    pub size: String,
    pub color: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_price: String,
    pub custom_note: String,
    pub image: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: "$0.00".to_string(),
            item_count: 0,
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items.iter().map(CartItemView::from).collect(),
            total: price::usd(cart.total()),
            item_count: cart.item_count(),
        }
    }
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id.clone(),
            name: item.name.clone(),
            size: item.size.clone(),
            color: item.color.clone(),
            quantity: item.quantity,
            unit_price: price::usd(item.price),
            line_price: price::usd(item.line_total()),
            custom_note: item.custom_note.clone(),
            image: item.image.clone(),
        }
    }
}

// =============================================================================
// Form Payloads
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub size: String,
    pub color: String,
    pub quantity: Option<u32>,
    #[serde(default)]
    pub custom_note: String,
}

/// Update cart quantity form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub size: String,
    pub color: String,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
    pub size: String,
    pub color: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template: items, summary, and the checkout form.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub customer: CustomerDraft,
    pub errors: CheckoutErrors,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Display the cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.cart().snapshot();

    CartShowTemplate {
        cart: CartView::from(&snapshot),
        customer: snapshot.customer,
        errors: CheckoutErrors::default(),
    }
}

/// Add an item to the cart (HTMX).
///
/// The product is resolved from the catalog so name, price, and image come
/// from reference data, never from the client. Returns the count badge with
/// an HTMX trigger so other fragments refresh.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<Response, AppError> {
    let Some(product) = state.catalog().product(&form.product_id) else {
        tracing::debug!("Add to cart for unknown product {}", form.product_id);
        return Err(AppError::NotFound(form.product_id));
    };

    let item = CartItem {
        product_id: product.id.clone(),
        name: product.name.clone(),
        price: product.price,
        size: form.size,
        color: form.color,
        quantity: form.quantity.unwrap_or(1).max(1),
        custom_note: form.custom_note.trim().to_string(),
        image: product.primary_image(),
    };
    state.cart().add_item(item);

    let count = state.cart().item_count();
    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate { count },
    )
        .into_response())
}

/// Change a cart line's quantity (HTMX).
///
/// Requested quantities below one remove the line (the shared boundary
/// policy); a miss is a no-op. Returns the cart items fragment.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<UpdateCartForm>,
) -> impl IntoResponse {
    state
        .cart()
        .change_quantity(&form.product_id, &form.size, &form.color, form.quantity);

    let cart = CartView::from(&state.cart().snapshot());
    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate { cart },
    )
}

/// Remove a cart line (HTMX).
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> impl IntoResponse {
    state
        .cart()
        .remove_item(&form.product_id, &form.size, &form.color);

    let cart = CartView::from(&state.cart().snapshot());
    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate { cart },
    )
}

/// Get the cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    CartCountTemplate {
        count: state.cart().item_count(),
    }
}
