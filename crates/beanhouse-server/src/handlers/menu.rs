//! Menu endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};
use beanhouse_core::Bean;

use crate::error::AppError;
use crate::services;
use crate::ServerState;

/// Lists the beans available to order.
pub async fn list(State(state): State<Arc<ServerState>>) -> Result<Json<Vec<Bean>>, AppError> {
    Ok(Json(services::order::menu(&state.store)?))
}
