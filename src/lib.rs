//! Pharmacy API
//!
//! Category management and order placement for a pharmacy backend, served
//! over actix-web with MySQL persistence.

pub mod app;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;
pub mod telemetry;

// Re-export commonly used types
pub use app::AppState;
pub use modules::categories;
pub use modules::medicines;
pub use modules::orders;
