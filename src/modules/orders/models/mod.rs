mod basket;
mod order;

pub use basket::{Basket, NewBasket};
pub use order::{
    CreateOrderLineRequest, CreatedOrder, EditOrderRequest, NewOrder, Order, OrderChanges,
    OrderStatus,
};
