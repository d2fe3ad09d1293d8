//! Order placement and status progression.
//!
//! Orders move `Pending -> Ready -> Completed`; advancing a completed order
//! leaves it completed.

use beanhouse_core::{Bean, Order, OrderStatus, ShopError};
use beanhouse_store::Store;
use tracing::info;

use crate::dto::PlaceOrderRequest;

/// Returns every bean on the menu.
pub fn menu(store: &Store) -> Result<Vec<Bean>, ShopError> {
    store.list_beans()
}

/// Creates a pending order after checking that both fields are present.
pub fn place_order(store: &Store, req: PlaceOrderRequest) -> Result<Order, ShopError> {
    let bean_name = req
        .bean_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ShopError::InvalidInput("missing field: bean_name".into()))?;
    let price = req
        .price
        .ok_or_else(|| ShopError::InvalidInput("missing field: price".into()))?;

    let order = store.create_order(&bean_name, price)?;
    info!("Order {} placed: {} ({})", order.id, order.items, order.total_amount);
    Ok(order)
}

pub fn order_status(store: &Store, order_id: i64) -> Result<OrderStatus, ShopError> {
    Ok(store.get_order(order_id)?.status)
}

/// Moves an order one step forward and returns its new status.
pub fn advance_status(store: &Store, order_id: i64) -> Result<OrderStatus, ShopError> {
    let order = store.get_order(order_id)?;
    let next = order.status.next();
    if next == order.status {
        return Ok(next);
    }

    let updated = store.update_order_status(order_id, next)?;
    info!("Order {}: {} -> {}", order_id, order.status, updated.status);
    Ok(updated.status)
}

/// Lists all orders, newest first.
pub fn list_orders(store: &Store) -> Result<Vec<Order>, ShopError> {
    store.list_orders()
}
