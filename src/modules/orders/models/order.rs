// Order model
//
// An order is created together with its baskets in one unit of work and
// afterwards holds the resolved collection of those baskets. Its total price
// always equals the sum of the basket prices.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::basket::Basket;
use crate::core::{AppError, Result};

/// Order status lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Freshly placed order
    #[default]
    Active,

    /// Handed over to the customer
    Completed,

    /// Withdrawn before completion
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Active => write!(f, "active"),
            OrderStatus::Completed => write!(f, "completed"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "active" => Ok(OrderStatus::Active),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(AppError::validation(format!("Unknown order status: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub status: OrderStatus,
    pub total_price: Decimal,
    pub baskets: Vec<Basket>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Unsaved order header
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub user_id: i64,
    pub status: OrderStatus,
    pub total_price: Decimal,
}

impl NewOrder {
    pub fn active(user_id: i64, total_price: Decimal) -> Self {
        Self {
            user_id,
            status: OrderStatus::Active,
            total_price,
        }
    }
}

/// One requested line of `POST /orders`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderLineRequest {
    pub medicine_id: i64,
    pub count: i32,
}

impl CreateOrderLineRequest {
    pub fn new(medicine_id: i64, count: i32) -> Self {
        Self { medicine_id, count }
    }
}

/// Payload of a successful order creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedOrder {
    pub order: Order,
    pub baskets: Vec<Basket>,
}

/// Body of `PUT /orders`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditOrderRequest {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
}

/// Editable order fields; `None` leaves the column untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderChanges {
    pub user_id: Option<i64>,
    pub status: Option<OrderStatus>,
}

impl EditOrderRequest {
    pub fn changes(&self) -> OrderChanges {
        OrderChanges {
            user_id: self.user_id,
            status: self.status,
        }
    }
}

impl OrderChanges {
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.status.is_none()
    }
}
