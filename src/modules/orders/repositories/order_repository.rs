// OrderRepository implementation
// Provides MySQL CRUD operations for orders and their baskets
//
// Implements:
// - Create order + baskets through a transactional unit of work
// - Read order by ID with its baskets
// - List orders with pagination (baskets included)
// - Update user/status of an order
// - Delete an order (baskets cascade)

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{MySql, MySqlPool, QueryBuilder, Transaction};

use crate::core::traits::Repository;
use crate::core::{AppError, PageWindow, Result};
use crate::modules::orders::models::{Basket, NewBasket, NewOrder, Order, OrderChanges, OrderStatus};

/// Transaction-scoped writer for one order and its baskets
///
/// Dropping a unit of work without calling [`OrderUnitOfWork::commit`]
/// discards everything written through it.
#[async_trait]
pub trait OrderUnitOfWork: Send {
    /// Insert the order header and return it with its assigned id
    async fn insert_order(&mut self, order: &NewOrder) -> Result<Order>;

    /// Insert basket lines in the given order and return the stored rows
    async fn insert_baskets(&mut self, baskets: &[NewBasket]) -> Result<Vec<Basket>>;

    async fn commit(self: Box<Self>) -> Result<()>;
}

/// Order persistence
#[async_trait]
pub trait OrderRepository: Repository<Order, i64> {
    /// Open a unit of work for creating an order
    async fn begin(&self) -> Result<Box<dyn OrderUnitOfWork>>;

    /// Apply `changes` to an order. `Ok(None)` when no row has this id.
    async fn update(&self, id: i64, changes: &OrderChanges) -> Result<Option<Order>>;
}

/// Repository for order database operations
#[derive(Clone)]
pub struct MySqlOrderRepository {
    pool: MySqlPool,
}

impl MySqlOrderRepository {
    /// Create a new order repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Load the baskets of every order in `order_ids`, grouped by order id
    async fn baskets_for(&self, order_ids: &[i64]) -> Result<HashMap<i64, Vec<Basket>>> {
        let mut grouped: HashMap<i64, Vec<Basket>> = HashMap::new();
        if order_ids.is_empty() {
            return Ok(grouped);
        }

        let mut query = QueryBuilder::<MySql>::new(
            "SELECT id, order_id, medicine_id, count, price, created_at FROM baskets WHERE order_id IN (",
        );
        let mut separated = query.separated(", ");
        for id in order_ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(") ORDER BY id");

        let baskets = query
            .build_query_as::<Basket>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to fetch baskets: {}", e)))?;

        for basket in baskets {
            grouped.entry(basket.order_id).or_default().push(basket);
        }

        Ok(grouped)
    }
}

#[async_trait]
impl Repository<Order, i64> for MySqlOrderRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, user_id, status, total_price, created_at, updated_at
            FROM orders
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to fetch order: {}", e)))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut baskets = self.baskets_for(&[id]).await?;
        let order = row.into_order(baskets.remove(&id).unwrap_or_default())?;

        Ok(Some(order))
    }

    async fn list(&self, window: PageWindow) -> Result<Vec<Order>> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, user_id, status, total_price, created_at, updated_at
            FROM orders
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(window.limit)
        .bind(window.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to list orders: {}", e)))?;

        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        let mut baskets = self.baskets_for(&ids).await?;

        rows.into_iter()
            .map(|row| {
                let lines = baskets.remove(&row.id).unwrap_or_default();
                row.into_order(lines)
            })
            .collect()
    }

    async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to delete order: {}", e)))?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl OrderRepository for MySqlOrderRepository {
    async fn begin(&self) -> Result<Box<dyn OrderUnitOfWork>> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to start transaction: {}", e)))?;

        Ok(Box::new(MySqlOrderUnitOfWork { tx }))
    }

    async fn update(&self, id: i64, changes: &OrderChanges) -> Result<Option<Order>> {
        sqlx::query(
            r#"
            UPDATE orders
            SET user_id = COALESCE(?, user_id),
                status = COALESCE(?, status),
                updated_at = NOW()
            WHERE id = ?
            "#,
        )
        .bind(changes.user_id)
        .bind(changes.status.map(|status| status.to_string()))
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to update order: {}", e)))?;

        self.find_by_id(id).await
    }
}

/// Unit of work backed by a MySQL transaction
pub struct MySqlOrderUnitOfWork {
    tx: Transaction<'static, MySql>,
}

#[async_trait]
impl OrderUnitOfWork for MySqlOrderUnitOfWork {
    async fn insert_order(&mut self, order: &NewOrder) -> Result<Order> {
        let result = sqlx::query(
            r#"
            INSERT INTO orders (user_id, status, total_price)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(order.user_id)
        .bind(order.status.to_string())
        .bind(order.total_price)
        .execute(&mut *self.tx)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to create order: {}", e)))?;

        let id = i64::try_from(result.last_insert_id())
            .map_err(|_| AppError::internal("Order id out of range"))?;

        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, user_id, status, total_price, created_at, updated_at
            FROM orders
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to read back order: {}", e)))?;

        row.into_order(vec![])
    }

    async fn insert_baskets(&mut self, baskets: &[NewBasket]) -> Result<Vec<Basket>> {
        if baskets.is_empty() {
            return Ok(vec![]);
        }

        let mut ids = Vec::with_capacity(baskets.len());
        for basket in baskets {
            let result = sqlx::query(
                r#"
                INSERT INTO baskets (order_id, medicine_id, count, price)
                VALUES (?, ?, ?, ?)
                "#,
            )
            .bind(basket.order_id)
            .bind(basket.medicine_id)
            .bind(basket.count)
            .bind(basket.price)
            .execute(&mut *self.tx)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to create basket: {}", e)))?;

            let id = i64::try_from(result.last_insert_id())
                .map_err(|_| AppError::internal("Basket id out of range"))?;
            ids.push(id);
        }

        let mut query = QueryBuilder::<MySql>::new(
            "SELECT id, order_id, medicine_id, count, price, created_at FROM baskets WHERE id IN (",
        );
        let mut separated = query.separated(", ");
        for id in &ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(") ORDER BY id");

        let stored = query
            .build_query_as::<Basket>()
            .fetch_all(&mut *self.tx)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to read back baskets: {}", e)))?;

        Ok(stored)
    }

    async fn commit(self: Box<Self>) -> Result<()> {
        self.tx
            .commit()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to commit transaction: {}", e)))
    }
}

// Helper struct for database mapping

#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: i64,
    user_id: i64,
    status: String,
    total_price: Decimal,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self, baskets: Vec<Basket>) -> Result<Order> {
        let status: OrderStatus = self
            .status
            .parse()
            .map_err(|_| AppError::Internal(format!("Invalid order status in database: {}", self.status)))?;

        Ok(Order {
            id: self.id,
            user_id: self.user_id,
            status,
            total_price: self.total_price,
            baskets,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
