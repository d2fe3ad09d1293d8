//! Customer-facing order handlers.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

use crate::dto::{OrderStatusResponse, PlaceOrderRequest, PlaceOrderResponse};
use crate::error::AppError;
use crate::services;
use crate::ServerState;

/// Places an order for a bean at the quoted price.
pub async fn place(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<PlaceOrderRequest>, JsonRejection>,
) -> Result<Json<PlaceOrderResponse>, AppError> {
    let Json(req) = payload?;
    let order = services::order::place_order(&state.store, req)?;
    Ok(Json(PlaceOrderResponse {
        message: "Order placed".into(),
        order_id: order.id,
    }))
}

/// Reports the current status of an order.
pub async fn status(
    State(state): State<Arc<ServerState>>,
    order_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<OrderStatusResponse>, AppError> {
    let Path(order_id) = order_id?;
    let status = services::order::order_status(&state.store, order_id)?;
    Ok(Json(OrderStatusResponse { status }))
}
