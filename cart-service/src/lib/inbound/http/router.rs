use std::sync::Arc;
use std::time::Duration;

use auth::TokenCodec;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::add_cart_item::add_cart_item;
use super::handlers::add_product::add_product;
use super::handlers::authenticate::authenticate;
use super::handlers::delete_cart_item::delete_cart_item;
use super::handlers::delete_product::delete_product;
use super::handlers::get_me::get_me;
use super::handlers::get_product::get_product;
use super::handlers::list_cart_items::list_cart_items;
use super::handlers::list_products::list_products;
use super::handlers::register_customer::register_customer;
use super::middleware::resolve_principal;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::cart::ports::CartServicePort;
use crate::domain::customer::ports::CustomerServicePort;
use crate::domain::product::ports::ProductServicePort;

/// Shared application state: explicitly constructed services behind their
/// ports, plus the token codec the middleware verifies against.
#[derive(Clone)]
pub struct AppState {
    pub customer_service: Arc<dyn CustomerServicePort>,
    pub auth_service: Arc<dyn AuthServicePort>,
    pub product_service: Arc<dyn ProductServicePort>,
    pub cart_service: Arc<dyn CartServicePort>,
    pub token_codec: Arc<TokenCodec>,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/auth/login", post(authenticate))
        .route("/users", post(register_customer))
        .route("/products", get(list_products))
        .route("/products", post(add_product))
        .route("/products/:product_id", get(get_product))
        .route("/products/:product_id", delete(delete_product));

    let protected_routes = Router::new()
        .route("/users/me", get(get_me))
        .route("/users/me/carts", post(add_cart_item))
        .route("/users/me/carts", get(list_cart_items))
        .route("/users/me/carts/:cart_item_id", delete(delete_cart_item))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            resolve_principal,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
