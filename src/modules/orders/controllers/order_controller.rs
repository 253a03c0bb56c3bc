use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::core::{ApiResponse, PageQuery};
use crate::middleware::auth::UserId;
use crate::modules::orders::models::{CreateOrderLineRequest, EditOrderRequest};
use crate::modules::orders::services::OrderService;

const SUCCESS_MESSAGE: &str = "Success";
const DELETED_MESSAGE: &str = "Order deleted successfully";

/// Place an order for the calling user
/// POST /orders
pub async fn create_order(
    service: web::Data<Arc<OrderService>>,
    user_id: UserId,
    request: web::Json<Vec<CreateOrderLineRequest>>,
) -> Result<HttpResponse, AppError> {
    let response = service
        .create_order(request.into_inner(), user_id.0)
        .await?;

    Ok(HttpResponse::Created().json(response))
}

/// List orders with their baskets
/// GET /orders?page=&rowsPerPage=
pub async fn list_orders(
    service: web::Data<Arc<OrderService>>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let page = service.get_all(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(page, SUCCESS_MESSAGE)))
}

/// Get order by ID
/// GET /orders/{id}
pub async fn get_order(
    service: web::Data<Arc<OrderService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let order = service.get_one(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(order, SUCCESS_MESSAGE)))
}

/// Update owner or status of an order
/// PUT /orders
pub async fn update_order(
    service: web::Data<Arc<OrderService>>,
    request: web::Json<EditOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let order = service.update(request.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(order)))
}

/// Delete an order
/// DELETE /orders/{id}
pub async fn delete_order(
    service: web::Data<Arc<OrderService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let order = service.delete(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(order, DELETED_MESSAGE)))
}

/// Configure order routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/orders")
            .route("", web::post().to(create_order))
            .route("", web::get().to(list_orders))
            .route("", web::put().to(update_order))
            .route("/{id}", web::get().to(get_order))
            .route("/{id}", web::delete().to(delete_order)),
    );
}
