//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::instrument;
use wakehealth_core::types::{Product, price};

use crate::filters;
use crate::state::AppState;

/// Product display data for grid cards.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub image: String,
    pub customizable: bool,
}

/// Color option display data.
#[derive(Clone)]
pub struct ColorView {
    pub name: String,
    pub hex: String,
}

/// Product display data for the detail page.
#[derive(Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub sizes: Vec<String>,
    pub colors: Vec<ColorView>,
    pub customizable: bool,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            price: price::usd(product.price),
            image: product.primary_image(),
            customizable: product.customizable,
        }
    }
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: price::usd(product.price),
            image: product.primary_image(),
            sizes: product.sizes.clone(),
            colors: product
                .colors
                .iter()
                .map(|c| ColorView {
                    name: c.name.clone(),
                    hex: c.hex.clone(),
                })
                .collect(),
            customizable: product.customizable,
        }
    }
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductView,
}

/// Dead-end page for unknown product ids.
#[derive(Template, WebTemplate)]
#[template(path = "products/not_found.html")]
pub struct ProductNotFoundTemplate {
    pub id: String,
}

/// Display the product detail page.
///
/// An id not present in the catalog renders the dead-end page with a 404
/// status; it is a not-found condition, not a fault.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.catalog().product(&id) {
        Some(product) => ProductShowTemplate {
            product: ProductView::from(product),
        }
        .into_response(),
        None => {
            tracing::debug!("Unknown product id: {id}");
            (StatusCode::NOT_FOUND, ProductNotFoundTemplate { id }).into_response()
        }
    }
}
