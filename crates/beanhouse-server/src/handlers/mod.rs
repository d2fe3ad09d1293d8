//! HTTP route handlers for the shop API.

pub mod admin;
pub mod menu;
pub mod order;

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}
