//! HTTP API for the beanhouse coffee shop.
//!
//! Exposes the menu, order placement, order status, and the admin board as
//! JSON endpoints over a [`Store`] injected through [`ServerState`].

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod services;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::Router;
use beanhouse_store::Store;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared server state accessible from all handlers.
pub struct ServerState {
    pub store: Store,
}

impl ServerState {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

/// Builds the application router with CORS and request tracing.
pub fn build_router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let api_routes = Router::new()
        .route("/api/menu", get(handlers::menu::list))
        .route("/api/order", post(handlers::order::place))
        .route("/api/order_status/{id}", get(handlers::order::status))
        .route("/api/admin/orders", get(handlers::admin::orders))
        .route("/api/admin/update_status/{id}", post(handlers::admin::update_status))
        .layer(trace_layer);

    Router::new()
        .merge(api_routes)
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}
