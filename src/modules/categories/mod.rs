// Categories module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::Category;
pub use repositories::{CategoryRepository, MySqlCategoryRepository};
pub use services::CategoryService;
