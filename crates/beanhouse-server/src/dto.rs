//! Data transfer objects for HTTP message serialization.

use beanhouse_core::{Order, OrderStatus};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/order`. Fields are optional so that absence surfaces as
/// a validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceOrderRequest {
    #[serde(default)]
    pub bean_name: Option<String>,
    #[serde(default)]
    pub price: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct PlaceOrderResponse {
    pub message: String,
    pub order_id: i64,
}

#[derive(Debug, Serialize)]
pub struct OrderStatusResponse {
    pub status: OrderStatus,
}

#[derive(Debug, Serialize)]
pub struct UpdateStatusResponse {
    pub message: String,
    pub new_status: OrderStatus,
}

/// Order as shown on the admin board.
#[derive(Debug, Serialize)]
pub struct AdminOrder {
    pub id: i64,
    pub items: String,
    pub total_amount: i64,
    pub status: OrderStatus,
    /// Time of day, `HH:MM:SS`.
    pub created_at: String,
}

impl From<Order> for AdminOrder {
    fn from(order: Order) -> Self {
        let created_at = order.created_time_of_day();
        Self {
            id: order.id,
            items: order.items,
            total_amount: order.total_amount,
            status: order.status,
            created_at,
        }
    }
}
