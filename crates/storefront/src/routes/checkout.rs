//! Checkout submission flow.
//!
//! `Editing -> Validating -> (Invalid -> Editing) | (Valid -> Submitted)`.
//!
//! Validation is synchronous: the four contact fields must be non-empty
//! after trimming. Any failure re-renders the cart page with field-keyed
//! errors and performs no side effects. A valid submission formats the
//! order message, clears the cart's line items, and redirects the (new)
//! browsing context to the WhatsApp deep link. The customer draft is
//! retained after submission so a returning customer does not retype it.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;
use wakehealth_core::cart::CustomerDraft;
use wakehealth_core::whatsapp;

use crate::state::AppState;

use super::cart::{CartShowTemplate, CartView};

/// Checkout form data: the four contact fields.
#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub whatsapp: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
}

impl CheckoutForm {
    fn into_draft(self) -> CustomerDraft {
        CustomerDraft {
            name: self.name,
            whatsapp: self.whatsapp,
            email: self.email,
            address: self.address,
        }
    }
}

/// Field-keyed validation errors, rendered next to the form fields.
#[derive(Debug, Clone, Default)]
pub struct CheckoutErrors {
    pub name: Option<&'static str>,
    pub whatsapp: Option<&'static str>,
    pub email: Option<&'static str>,
    pub address: Option<&'static str>,
}

impl CheckoutErrors {
    /// Whether validation passed.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.name.is_none()
            && self.whatsapp.is_none()
            && self.email.is_none()
            && self.address.is_none()
    }
}

/// Check the four required fields for non-emptiness after trimming.
///
/// This is the only validation performed; no email or phone format checks.
#[must_use]
pub fn validate(customer: &CustomerDraft) -> CheckoutErrors {
    CheckoutErrors {
        name: customer
            .name
            .trim()
            .is_empty()
            .then_some("El nombre es requerido"),
        whatsapp: customer
            .whatsapp
            .trim()
            .is_empty()
            .then_some("El WhatsApp es requerido"),
        email: customer
            .email
            .trim()
            .is_empty()
            .then_some("El email es requerido"),
        address: customer
            .address
            .trim()
            .is_empty()
            .then_some("La direcci\u{f3}n es requerida"),
    }
}

/// Submit the order.
///
/// The submitted draft is stored before validation so the customer's input
/// survives a failed attempt. An empty cart cannot be submitted; the
/// handler redirects back to the cart page.
#[instrument(skip(state, form))]
pub async fn submit(State(state): State<AppState>, Form(form): Form<CheckoutForm>) -> Response {
    let cart = state.cart();

    // Keep whatever the customer typed, valid or not.
    let draft = form.into_draft();
    cart.set_customer(draft.clone());

    if cart.is_empty() {
        return Redirect::to("/carrito").into_response();
    }

    let errors = validate(&draft);
    if !errors.is_clean() {
        let snapshot = cart.snapshot();
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            CartShowTemplate {
                cart: CartView::from(&snapshot),
                customer: snapshot.customer,
                errors,
            },
        )
            .into_response();
    }

    let snapshot = cart.snapshot();
    let message = whatsapp::order_message(&snapshot.items, &snapshot.customer, snapshot.total());
    let url = whatsapp::order_url(&message, &state.catalog().site().whatsapp_number);

    cart.clear_items();
    tracing::info!("Order submitted via WhatsApp deep link");

    Redirect::to(&url).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> CustomerDraft {
        CustomerDraft {
            name: "Ana Li".to_string(),
            whatsapp: "+1 555 0100".to_string(),
            email: "ana@example.com".to_string(),
            address: "123 Main St".to_string(),
        }
    }

    #[test]
    fn all_fields_populated_passes() {
        assert!(validate(&full_draft()).is_clean());
    }

    #[test]
    fn each_blank_field_is_reported_individually() {
        let mut draft = full_draft();
        draft.name = String::new();
        let errors = validate(&draft);
        assert_eq!(errors.name, Some("El nombre es requerido"));
        assert!(errors.whatsapp.is_none());
        assert!(!errors.is_clean());

        let mut draft = full_draft();
        draft.whatsapp = String::new();
        assert_eq!(validate(&draft).whatsapp, Some("El WhatsApp es requerido"));

        let mut draft = full_draft();
        draft.email = String::new();
        assert_eq!(validate(&draft).email, Some("El email es requerido"));

        let mut draft = full_draft();
        draft.address = String::new();
        assert_eq!(
            validate(&draft).address,
            Some("La direcci\u{f3}n es requerida")
        );
    }

    #[test]
    fn whitespace_only_fields_fail_validation() {
        let mut draft = full_draft();
        draft.name = "   \t".to_string();
        assert!(!validate(&draft).is_clean());
    }

    #[test]
    fn no_format_validation_beyond_presence() {
        // "not-an-email" and a non-numeric phone still pass; presence is the
        // whole contract.
        let draft = CustomerDraft {
            name: "x".to_string(),
            whatsapp: "call me".to_string(),
            email: "not-an-email".to_string(),
            address: "?".to_string(),
        };
        assert!(validate(&draft).is_clean());
    }
}
