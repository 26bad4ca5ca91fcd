//! Catalog page route handler: name search plus category filtering.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;
use wakehealth_core::types::Category;

use crate::filters;
use crate::state::AppState;

use super::products::ProductCardView;

/// Category display data for templates.
#[derive(Clone)]
pub struct CategoryView {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
}

impl From<&Category> for CategoryView {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.clone(),
            icon: category.icon.clone(),
            description: category.description.clone(),
        }
    }
}

/// Catalog filter query parameters.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    /// Category id to filter by (`?categoria=`).
    pub categoria: Option<String>,
    /// Name search (`?q=`).
    pub q: Option<String>,
}

/// Catalog listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog.html")]
pub struct CatalogTemplate {
    pub products: Vec<ProductCardView>,
    pub categories: Vec<CategoryView>,
    pub selected_category: Option<String>,
    pub query: String,
}

/// Display the catalog, filtered by search text and/or category.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<CatalogQuery>,
) -> impl IntoResponse {
    let catalog = state.catalog();

    let query = params.q.as_deref().map(str::trim).unwrap_or_default();
    let selected = params
        .categoria
        .as_deref()
        .filter(|c| !c.is_empty());

    let products = catalog
        .filter(
            if query.is_empty() { None } else { Some(query) },
            selected,
        )
        .into_iter()
        .map(ProductCardView::from)
        .collect();

    CatalogTemplate {
        products,
        categories: catalog.categories().iter().map(CategoryView::from).collect(),
        selected_category: selected.map(str::to_string),
        query: query.to_string(),
    }
}
