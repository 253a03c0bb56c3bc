pub mod categories;
pub mod health;
pub mod medicines;
pub mod orders;
