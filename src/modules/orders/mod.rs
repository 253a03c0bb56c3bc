// Orders module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Basket, CreateOrderLineRequest, CreatedOrder, Order, OrderStatus};
pub use repositories::{MySqlOrderRepository, OrderRepository, OrderUnitOfWork};
pub use services::{build_basket_lines, compute_total_price, OrderService};
