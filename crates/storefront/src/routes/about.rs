//! About page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;
use wakehealth_core::types::SiteConfig;

use crate::filters;
use crate::state::AppState;

/// Company contact display data for templates.
#[derive(Clone)]
pub struct CompanyView {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl From<&SiteConfig> for CompanyView {
    fn from(site: &SiteConfig) -> Self {
        Self {
            name: site.company_name.clone(),
            email: site.company_email.clone(),
            phone: site.company_phone.clone(),
            address: site.company_address.clone(),
        }
    }
}

/// About page template: story, mission, and the contact block.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub company: CompanyView,
}

/// Display the about page with the company contact details.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    AboutTemplate {
        company: CompanyView::from(state.catalog().site()),
    }
}
