//! Admin board handlers: order listing and status advance.

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use tracing::info;

use crate::dto::{AdminOrder, UpdateStatusResponse};
use crate::error::AppError;
use crate::services;
use crate::ServerState;

/// Lists all orders, newest first.
pub async fn orders(
    State(state): State<Arc<ServerState>>,
) -> Result<Json<Vec<AdminOrder>>, AppError> {
    let orders = services::order::list_orders(&state.store)?;
    Ok(Json(orders.into_iter().map(AdminOrder::from).collect()))
}

/// Advances an order to its next status.
pub async fn update_status(
    State(state): State<Arc<ServerState>>,
    order_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<UpdateStatusResponse>, AppError> {
    let Path(order_id) = order_id?;
    info!("Advancing order {}", order_id);
    let new_status = services::order::advance_status(&state.store, order_id)?;
    Ok(Json(UpdateStatusResponse {
        message: "Status updated".into(),
        new_status,
    }))
}
