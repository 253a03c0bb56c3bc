use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::core::{ApiResponse, PageQuery};
use crate::modules::categories::models::{CreateCategoryRequest, EditCategoryRequest};
use crate::modules::categories::services::CategoryService;

/// Create a category
/// POST /categories
pub async fn create_category(
    service: web::Data<Arc<CategoryService>>,
    request: web::Json<CreateCategoryRequest>,
) -> Result<HttpResponse, AppError> {
    let category = service.create(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(category)))
}

/// List categories
/// GET /categories?page=&rowsPerPage=
pub async fn list_categories(
    service: web::Data<Arc<CategoryService>>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let page = service.get_all(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(page)))
}

/// Get category by ID
/// GET /categories/{id}
pub async fn get_category(
    service: web::Data<Arc<CategoryService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let category = service.get_one(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(category)))
}

/// Rename a category
/// PUT /categories
pub async fn edit_category(
    service: web::Data<Arc<CategoryService>>,
    request: web::Json<EditCategoryRequest>,
) -> Result<HttpResponse, AppError> {
    let category = service.edit(request.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(category)))
}

/// Delete a category
/// DELETE /categories/{id}
pub async fn delete_category(
    service: web::Data<Arc<CategoryService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let result = service.delete(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(result)))
}

/// Configure category routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/categories")
            .route("", web::post().to(create_category))
            .route("", web::get().to(list_categories))
            .route("", web::put().to(edit_category))
            .route("/{id}", web::get().to(get_category))
            .route("/{id}", web::delete().to(delete_category)),
    );
}
