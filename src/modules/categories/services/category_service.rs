use std::sync::Arc;

use crate::core::{AppError, PageQuery, Paginated, Result};
use crate::modules::categories::models::{
    validate_category_name, Category, CreateCategoryRequest, DeleteResult, EditCategoryRequest,
};
use crate::modules::categories::repositories::CategoryRepository;

/// Service for category business logic
pub struct CategoryService {
    category_repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(category_repo: Arc<dyn CategoryRepository>) -> Self {
        Self { category_repo }
    }

    /// Create a category. Duplicate names fail with `Conflict`.
    pub async fn create(&self, request: CreateCategoryRequest) -> Result<Category> {
        let name = validate_category_name(&request.name)?;

        let category = self.category_repo.create(&name).await?;
        tracing::info!(category_id = category.id, name = %category.name, "Category created");

        Ok(category)
    }

    /// One page of categories plus the total count
    pub async fn get_all(&self, query: PageQuery) -> Result<Paginated<Category>> {
        let window = query.window()?;

        let items = self.category_repo.list(window).await?;
        let count = self.category_repo.count().await?;

        Ok(Paginated { items, count })
    }

    pub async fn get_one(&self, id: i64) -> Result<Category> {
        self.category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Category {} not found", id)))
    }

    /// Rename a category
    pub async fn edit(&self, request: EditCategoryRequest) -> Result<Category> {
        let name = validate_category_name(&request.name)?;

        self.category_repo
            .update(request.id, &name)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Category {} not found", request.id)))
    }

    /// Delete a category, reporting how many rows went away
    pub async fn delete(&self, id: i64) -> Result<DeleteResult> {
        let deleted = self.category_repo.delete(id).await?;

        if deleted == 0 {
            return Err(AppError::not_found(format!("Category {} not found", id)));
        }

        tracing::info!(category_id = id, "Category deleted");
        Ok(DeleteResult { deleted })
    }
}
