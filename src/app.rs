//! Service wiring shared by the binary and the HTTP tests.

use std::sync::Arc;

use actix_web::web;
use sqlx::MySqlPool;

use crate::middleware::{json_error_handler, path_error_handler, query_error_handler};
use crate::modules::categories::{self, CategoryRepository, CategoryService, MySqlCategoryRepository};
use crate::modules::medicines::{MedicineRepository, MySqlMedicineRepository};
use crate::modules::orders::{self, MySqlOrderRepository, OrderRepository, OrderService};

/// Services handed to the request handlers
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<CategoryService>,
    pub orders: Arc<OrderService>,
}

impl AppState {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        order_repo: Arc<dyn OrderRepository>,
        medicine_repo: Arc<dyn MedicineRepository>,
    ) -> Self {
        Self {
            categories: Arc::new(CategoryService::new(category_repo)),
            orders: Arc::new(OrderService::new(order_repo, medicine_repo)),
        }
    }

    /// State backed by the MySQL repositories
    pub fn mysql(pool: MySqlPool) -> Self {
        Self::new(
            Arc::new(MySqlCategoryRepository::new(pool.clone())),
            Arc::new(MySqlOrderRepository::new(pool.clone())),
            Arc::new(MySqlMedicineRepository::new(pool)),
        )
    }

    /// Register services, extractor error handlers and the category/order routes
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.categories.clone()))
            .app_data(web::Data::new(self.orders.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .configure(categories::controllers::configure)
            .configure(orders::controllers::configure);
    }
}
