//! Core domain types and error definitions for beanhouse.
//!
//! This crate provides the types shared by the store and the HTTP server:
//!
//! - [`Bean`] and [`NewBean`] — Coffee products on the menu
//! - [`Order`] and [`OrderStatus`] — Customer orders and their fulfillment state
//! - [`ShopError`] — Error type for store and order operations
//!
//! # Example
//!
//! ```rust
//! use beanhouse_core::OrderStatus;
//!
//! let status = OrderStatus::default();
//! assert_eq!(status, OrderStatus::Pending);
//! assert_eq!(status.next(), OrderStatus::Ready);
//! assert_eq!(status.next().next(), OrderStatus::Completed);
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while reading or mutating shop data.
#[derive(Error, Debug)]
pub enum ShopError {
    /// Request was missing a required field or body.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No order exists with the given id.
    #[error("Order not found: {0}")]
    OrderNotFound(i64),

    /// The underlying datastore failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ShopError {
    /// Creates a storage error from any displayable source.
    pub fn storage(err: impl fmt::Display) -> Self {
        Self::Storage(err.to_string())
    }
}

/// A purchasable coffee product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bean {
    pub id: i64,
    pub name: String,
    pub origin: String,
    pub roast_level: String,
    pub flavor: String,
    /// Price in whole currency units.
    pub price: i64,
}

/// A bean record that has not been assigned an id yet.
#[derive(Debug, Clone, Copy)]
pub struct NewBean<'a> {
    pub name: &'a str,
    pub origin: &'a str,
    pub roast_level: &'a str,
    pub flavor: &'a str,
    pub price: i64,
}

/// Fulfillment state of an order.
///
/// Orders only move forward:
///
/// | Current | Next |
/// |---------|------|
/// | `Pending` | `Ready` |
/// | `Ready` | `Completed` |
/// | `Completed` | `Completed` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Placed and waiting to be prepared. New orders start here.
    #[default]
    Pending,
    /// Prepared and waiting for pickup.
    Ready,
    /// Handed over. Terminal.
    Completed,
}

impl OrderStatus {
    /// Returns the state that follows this one.
    pub fn next(self) -> Self {
        match self {
            Self::Pending => Self::Ready,
            Self::Ready | Self::Completed => Self::Completed,
        }
    }

    /// Whether no further transition is possible.
    pub fn is_terminal(self) -> bool {
        self == Self::Completed
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Ready => "Ready",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Ready" => Ok(Self::Ready),
            "Completed" => Ok(Self::Completed),
            other => Err(ShopError::Storage(format!("unknown order status '{other}'"))),
        }
    }
}

/// A customer's order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    /// Bean name copied at order time.
    pub items: String,
    pub total_amount: i64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Creation time as a wall-clock `HH:MM:SS` string.
    pub fn created_time_of_day(&self) -> String {
        self.created_at.format("%H:%M:%S").to_string()
    }
}
