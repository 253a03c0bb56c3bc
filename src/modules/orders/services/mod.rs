pub mod order_service;
pub mod pricing;

pub use order_service::OrderService;
pub use pricing::{build_basket_lines, compute_total_price};
