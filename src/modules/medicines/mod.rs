// Medicines module
//
// Read-only catalogue lookup used by the order workflow.

pub mod models;
pub mod repositories;

pub use models::Medicine;
pub use repositories::{MedicineRepository, MySqlMedicineRepository};
