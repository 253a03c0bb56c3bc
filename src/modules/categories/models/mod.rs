mod category;

pub use category::{
    validate_category_name, Category, CreateCategoryRequest, DeleteResult, EditCategoryRequest,
};
