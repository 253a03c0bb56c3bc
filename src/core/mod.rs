pub mod error;
pub mod pagination;
pub mod response;
pub mod traits;

pub use error::{AppError, Result};
pub use pagination::{PageQuery, PageWindow, Paginated};
pub use response::{ApiResponse, ResponseStatus};
