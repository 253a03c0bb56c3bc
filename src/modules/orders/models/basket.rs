use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Order line: one medicine, how many, and the line sub-total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Basket {
    pub id: i64,
    pub order_id: i64,
    pub medicine_id: i64,
    pub count: i32,
    /// medicine price × count
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Basket line that has not been written yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBasket {
    pub order_id: i64,
    pub medicine_id: i64,
    pub count: i32,
    pub price: Decimal,
}
