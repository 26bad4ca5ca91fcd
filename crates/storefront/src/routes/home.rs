//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::state::AppState;

use super::catalog::CategoryView;
use super::products::ProductCardView;

/// Number of products featured on the home page.
const FEATURED_COUNT: usize = 4;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub categories: Vec<CategoryView>,
    pub featured: Vec<ProductCardView>,
}

/// Display the home page: hero, category cards, featured products.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.catalog();

    HomeTemplate {
        categories: catalog.categories().iter().map(CategoryView::from).collect(),
        featured: catalog
            .featured(FEATURED_COUNT)
            .iter()
            .map(ProductCardView::from)
            .collect(),
    }
}
