//! Route-level tests exercising the full router against an in-memory cart.

#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;
use wakehealth_storefront::cart::CartHandle;
use wakehealth_storefront::catalog::Catalog;
use wakehealth_storefront::config::StorefrontConfig;
use wakehealth_storefront::routes;
use wakehealth_storefront::state::AppState;
use wakehealth_storefront::storage::CartStorage;

fn test_app() -> Router {
    let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data");
    let config = StorefrontConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        data_dir: data_dir.clone(),
        state_dir: PathBuf::from("unused"),
        static_dir: PathBuf::from("static"),
    };
    let catalog = Catalog::load(&data_dir).unwrap();
    let cart = CartHandle::hydrate(CartStorage::in_memory());
    let state = AppState::with_parts(config, catalog, cart);

    Router::new().merge(routes::routes()).with_state(state)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn post_form(app: &Router, uri: &str, body: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

const ADD_SCRUB_TOP: &str = "product_id=scrub-top-clasico&size=M&color=Azul&quantity=1";
const VALID_CHECKOUT: &str =
    "name=Ana%20Li&whatsapp=%2B1%20555%200100&email=ana%40example.com&address=123%20Main%20St";

#[tokio::test]
async fn home_page_renders_categories_and_featured_products() {
    let app = test_app();
    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Nuestras Categor"));
    assert!(body.contains("Scrub Top Cl"));
}

#[tokio::test]
async fn catalog_search_filters_by_name() {
    let app = test_app();

    let (status, body) = get(&app, "/catalogo?q=bata").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Bata de Laboratorio"));
    assert!(!body.contains("/producto/gorro-quirurgico"));
}

#[tokio::test]
async fn catalog_category_filter_narrows_results() {
    let app = test_app();

    let (status, body) = get(&app, "/catalogo?categoria=gorros").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/producto/gorro-quirurgico"));
    assert!(!body.contains("/producto/scrub-top-clasico"));
}

#[tokio::test]
async fn catalog_with_no_matches_renders_empty_state() {
    let app = test_app();
    let (status, body) = get(&app, "/catalogo?q=zzz-no-match").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No se encontraron productos"));
}

#[tokio::test]
async fn about_page_renders_the_company_contact_details() {
    let app = test_app();
    let (status, body) = get(&app, "/nosotros").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Sobre Nosotros"));
    assert!(body.contains("hola@wakehealth.example"));
    assert!(body.contains("+52 1 55 1234 5678"));
    assert!(body.contains("Av. Reforma 123, Ciudad de M"));
}

#[tokio::test]
async fn product_page_shows_detail() {
    let app = test_app();
    let (status, body) = get(&app, "/producto/scrub-top-clasico").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Scrub Top Cl"));
    assert!(body.contains("$20.00"));
}

#[tokio::test]
async fn unknown_product_is_a_dead_end_page_not_a_crash() {
    let app = test_app();
    let (status, body) = get(&app, "/producto/no-such-product").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Producto no encontrado"));
}

#[tokio::test]
async fn add_to_cart_returns_count_badge_and_trigger() {
    let app = test_app();

    let response = post_form(&app, "/carrito/add", ADD_SCRUB_TOP).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("HX-Trigger").unwrap(),
        "cart-updated"
    );

    let (_, count) = get(&app, "/carrito/count").await;
    assert!(count.contains(">1<"));
}

#[tokio::test]
async fn adding_the_same_variant_twice_merges_into_one_line() {
    let app = test_app();

    post_form(&app, "/carrito/add", ADD_SCRUB_TOP).await;
    post_form(&app, "/carrito/add", ADD_SCRUB_TOP).await;

    let (_, count) = get(&app, "/carrito/count").await;
    assert!(count.contains(">2<"));

    // One line item with the merged quantity, one unchanged total per unit.
    let (_, body) = get(&app, "/carrito").await;
    assert_eq!(body.matches("Talla: M | Color: Azul").count(), 1);
    assert!(body.contains("$40.00"));
}

#[tokio::test]
async fn add_to_cart_for_unknown_product_is_not_found() {
    let app = test_app();
    let response = post_form(
        &app,
        "/carrito/add",
        "product_id=no-such&size=M&color=Azul",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn quantity_update_to_zero_removes_the_line() {
    let app = test_app();
    post_form(&app, "/carrito/add", ADD_SCRUB_TOP).await;

    let response = post_form(
        &app,
        "/carrito/update",
        "product_id=scrub-top-clasico&size=M&color=Azul&quantity=0",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let (_, count) = get(&app, "/carrito/count").await;
    assert!(count.contains(">0<"));
}

#[tokio::test]
async fn remove_of_a_missing_line_is_a_silent_noop() {
    let app = test_app();
    post_form(&app, "/carrito/add", ADD_SCRUB_TOP).await;

    let response = post_form(
        &app,
        "/carrito/remove",
        "product_id=scrub-top-clasico&size=XL&color=Verde",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let (_, count) = get(&app, "/carrito/count").await;
    assert!(count.contains(">1<"));
}

#[tokio::test]
async fn empty_cart_page_blocks_checkout() {
    let app = test_app();
    let (status, body) = get(&app, "/carrito").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Tu carrito est"));
    assert!(!body.contains("action=\"/checkout\""));
}

#[tokio::test]
async fn checkout_with_blank_field_blocks_submission_and_keeps_the_cart() {
    let app = test_app();
    post_form(&app, "/carrito/add", ADD_SCRUB_TOP).await;

    let response = post_form(
        &app,
        "/checkout",
        "name=&whatsapp=%2B1%20555%200100&email=ana%40example.com&address=123%20Main%20St",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(body.contains("El nombre es requerido"));
    // Other fields survive the failed attempt.
    assert!(body.contains("ana@example.com"));

    // No side effects: the cart still holds the item.
    let (_, count) = get(&app, "/carrito/count").await;
    assert!(count.contains(">1<"));
}

#[tokio::test]
async fn whitespace_only_fields_also_fail_validation() {
    let app = test_app();
    post_form(&app, "/carrito/add", ADD_SCRUB_TOP).await;

    let response = post_form(
        &app,
        "/checkout",
        "name=%20%20&whatsapp=x&email=x&address=x",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn valid_checkout_redirects_to_the_deep_link_and_clears_the_items() {
    let app = test_app();
    post_form(&app, "/carrito/add", ADD_SCRUB_TOP).await;

    let response = post_form(&app, "/checkout", VALID_CHECKOUT).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(location.starts_with("https://wa.me/5215512345678?text="));
    // The encoded message never carries raw spaces or newlines.
    assert!(!location.contains(' '));
    assert!(location.contains("Scrub%20Top"));

    let (_, count) = get(&app, "/carrito/count").await;
    assert!(count.contains(">0<"));
}

#[tokio::test]
async fn customer_draft_is_retained_after_successful_checkout() {
    // Only the line items are cleared; the contact draft stays for the
    // next order.
    let app = test_app();
    post_form(&app, "/carrito/add", ADD_SCRUB_TOP).await;
    post_form(&app, "/checkout", VALID_CHECKOUT).await;

    post_form(&app, "/carrito/add", ADD_SCRUB_TOP).await;
    let (_, body) = get(&app, "/carrito").await;
    assert!(body.contains("Ana Li"));
    assert!(body.contains("ana@example.com"));
}

#[tokio::test]
async fn checkout_with_an_empty_cart_redirects_back() {
    let app = test_app();
    let response = post_form(&app, "/checkout", VALID_CHECKOUT).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/carrito"
    );
}
