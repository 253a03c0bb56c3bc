use std::collections::BTreeSet;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::core::{AppError, ApiResponse, PageQuery, Paginated, Result};
use crate::modules::medicines::repositories::MedicineRepository;
use crate::modules::orders::models::{
    CreateOrderLineRequest, CreatedOrder, EditOrderRequest, NewOrder, Order,
};
use crate::modules::orders::repositories::OrderRepository;
use crate::modules::orders::services::pricing::{build_basket_lines, compute_total_price};

/// Service for order business logic
pub struct OrderService {
    order_repo: Arc<dyn OrderRepository>,
    medicine_repo: Arc<dyn MedicineRepository>,
}

impl OrderService {
    pub fn new(
        order_repo: Arc<dyn OrderRepository>,
        medicine_repo: Arc<dyn MedicineRepository>,
    ) -> Self {
        Self {
            order_repo,
            medicine_repo,
        }
    }

    /// Place an order for `user_id`
    ///
    /// Resolves the requested medicines, prices the order, then writes the
    /// order and its baskets in a single unit of work. Requests for medicines
    /// that do not exist are dropped; if none of them exist the call fails with
    /// `NotFound`.
    ///
    /// Validation and not-found errors reach the caller unchanged. Any other
    /// failure is logged and re-raised as `Internal` carrying the original
    /// message. Nothing is left behind on failure.
    pub async fn create_order(
        &self,
        lines: Vec<CreateOrderLineRequest>,
        user_id: i64,
    ) -> Result<ApiResponse<CreatedOrder>> {
        match self.place_order(&lines, user_id).await {
            Ok(created) => {
                tracing::info!(
                    order_id = created.order.id,
                    user_id,
                    total_price = %created.order.total_price,
                    baskets = created.baskets.len(),
                    "Order created"
                );
                Ok(ApiResponse::success(created))
            }
            Err(err) if err.is_client_error() => Err(err),
            Err(err) => {
                tracing::error!(user_id, error = %err, "Order creation failed");
                let detail = match err {
                    AppError::Internal(message) => message,
                    other => other.to_string(),
                };
                Err(AppError::Internal(format!("Order creation failed: {}", detail)))
            }
        }
    }

    async fn place_order(
        &self,
        lines: &[CreateOrderLineRequest],
        user_id: i64,
    ) -> Result<CreatedOrder> {
        validate_order_lines(lines)?;

        let requested_ids = distinct_medicine_ids(lines);
        let medicines = self.medicine_repo.find_by_ids(&requested_ids).await?;
        if medicines.is_empty() {
            return Err(AppError::not_found("No medicines found for the requested ids"));
        }

        let unresolved: Vec<i64> = requested_ids
            .iter()
            .copied()
            .filter(|id| !medicines.iter().any(|medicine| medicine.id == *id))
            .collect();
        if !unresolved.is_empty() {
            tracing::warn!(?unresolved, "Dropping order lines for unknown medicines");
        }

        let total_price = compute_total_price(&medicines, lines);
        tracing::debug!(%total_price, medicines = medicines.len(), "Order priced");

        // Dropping `uow` on any early return rolls the transaction back.
        let mut uow = self.order_repo.begin().await?;

        let mut order = uow
            .insert_order(&NewOrder::active(user_id, total_price))
            .await?;
        tracing::debug!(order_id = order.id, "Order persisted");

        let basket_lines = build_basket_lines(&medicines, lines, order.id);
        let baskets = uow.insert_baskets(&basket_lines).await?;

        let basket_total: Decimal = baskets.iter().map(|basket| basket.price).sum();
        if basket_total != order.total_price {
            return Err(AppError::Internal(format!(
                "Basket total {} does not match order total {} for order {}",
                basket_total, order.total_price, order.id
            )));
        }

        uow.commit().await?;

        order.baskets = baskets.clone();

        Ok(CreatedOrder { order, baskets })
    }

    /// One page of orders (with baskets) plus the total count
    pub async fn get_all(&self, query: PageQuery) -> Result<Paginated<Order>> {
        let window = query.window()?;

        let items = self.order_repo.list(window).await?;
        let count = self.order_repo.count().await?;

        Ok(Paginated { items, count })
    }

    pub async fn get_one(&self, id: i64) -> Result<Order> {
        self.order_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))
    }

    /// Change the owner or status of an order
    pub async fn update(&self, request: EditOrderRequest) -> Result<Order> {
        let existing = self.get_one(request.id).await?;

        let changes = request.changes();
        if changes.is_empty() {
            return Ok(existing);
        }

        self.order_repo
            .update(request.id, &changes)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Order {} not found", request.id)))
    }

    /// Delete an order and its baskets, returning the removed order
    pub async fn delete(&self, id: i64) -> Result<Order> {
        let order = self.get_one(id).await?;

        let deleted = self.order_repo.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::not_found(format!("Order {} not found", id)));
        }

        tracing::info!(order_id = id, "Order deleted");
        Ok(order)
    }
}

/// Reject empty orders and non-positive counts
fn validate_order_lines(lines: &[CreateOrderLineRequest]) -> Result<()> {
    if lines.is_empty() {
        return Err(AppError::validation("Order must contain at least one line"));
    }

    if let Some(line) = lines.iter().find(|line| line.count <= 0) {
        return Err(AppError::validation(format!(
            "Count must be positive, got {} for medicine {}",
            line.count, line.medicine_id
        )));
    }

    Ok(())
}

/// Requested medicine ids without duplicates, ascending
fn distinct_medicine_ids(lines: &[CreateOrderLineRequest]) -> Vec<i64> {
    lines
        .iter()
        .map(|line| line.medicine_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
