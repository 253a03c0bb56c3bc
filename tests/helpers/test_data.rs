// Test data factory
//
// Catalogue fixtures and wired-up services over in-memory repositories.

use std::sync::Arc;

use pharmacy_api::categories::CategoryService;
use pharmacy_api::medicines::Medicine;
use pharmacy_api::orders::{CreateOrderLineRequest, OrderService};
use pharmacy_api::AppState;
use rust_decimal_macros::dec;

use super::in_memory::{
    InMemoryCategoryRepository, InMemoryMedicineRepository, InMemoryOrderRepository,
};

pub const TEST_USER_ID: i64 = 17;

/// Small catalogue: ids 1, 2, 5 with distinct prices
pub fn sample_medicines() -> Vec<Medicine> {
    vec![
        Medicine::new(1, "Paracetamol 500mg", dec!(12.50)),
        Medicine::new(2, "Amoxicillin 250mg", dec!(48.00)),
        Medicine::new(5, "Ibuprofen 200mg", dec!(100)),
    ]
}

pub fn line(medicine_id: i64, count: i32) -> CreateOrderLineRequest {
    CreateOrderLineRequest::new(medicine_id, count)
}

/// Order service plus handles on its repositories for assertions
pub struct OrderFixture {
    pub service: OrderService,
    pub orders: InMemoryOrderRepository,
    pub medicines: InMemoryMedicineRepository,
}

pub fn order_fixture() -> OrderFixture {
    let orders = InMemoryOrderRepository::new();
    let medicines = InMemoryMedicineRepository::with(sample_medicines());
    let service = OrderService::new(Arc::new(orders.clone()), Arc::new(medicines.clone()));

    OrderFixture {
        service,
        orders,
        medicines,
    }
}

pub struct CategoryFixture {
    pub service: CategoryService,
    pub categories: InMemoryCategoryRepository,
}

pub fn category_fixture() -> CategoryFixture {
    let categories = InMemoryCategoryRepository::new();
    let service = CategoryService::new(Arc::new(categories.clone()));

    CategoryFixture {
        service,
        categories,
    }
}

/// Application state over fresh in-memory repositories
pub fn in_memory_state() -> (AppState, InMemoryOrderRepository, InMemoryCategoryRepository) {
    let orders = InMemoryOrderRepository::new();
    let categories = InMemoryCategoryRepository::new();
    let state = AppState::new(
        Arc::new(categories.clone()),
        Arc::new(orders.clone()),
        Arc::new(InMemoryMedicineRepository::with(sample_medicines())),
    );

    (state, orders, categories)
}
