// CategoryRepository implementation
// Provides MySQL CRUD operations for categories
//
// Name uniqueness is enforced by the `uq_categories_name` index. Inserts and
// renames that hit it surface as `AppError::Conflict`, which makes the
// duplicate check atomic instead of a separate lookup followed by an insert.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::MySqlPool;

use crate::core::error::is_unique_violation;
use crate::core::traits::Repository;
use crate::core::{AppError, PageWindow, Result};
use crate::modules::categories::models::Category;

/// Category persistence
#[async_trait]
pub trait CategoryRepository: Repository<Category, i64> {
    /// Insert a new category, failing with `Conflict` when the name is taken
    async fn create(&self, name: &str) -> Result<Category>;

    /// Rename a category. `Ok(None)` when no row has this id.
    async fn update(&self, id: i64, name: &str) -> Result<Option<Category>>;
}

/// Repository for category database operations
#[derive(Clone)]
pub struct MySqlCategoryRepository {
    pool: MySqlPool,
}

impl MySqlCategoryRepository {
    /// Create a new category repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn map_write_error(err: sqlx::Error, name: &str) -> AppError {
        if is_unique_violation(&err) {
            return AppError::conflict(format!("Category with name '{}' already exists", name));
        }
        AppError::Database(err)
    }
}

#[async_trait]
impl Repository<Category, i64> for MySqlCategoryRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM categories
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    async fn list(&self, window: PageWindow) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM categories
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(window.limit)
        .bind(window.offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl CategoryRepository for MySqlCategoryRepository {
    async fn create(&self, name: &str) -> Result<Category> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO categories (name, created_at, updated_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(name)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, name))?;

        let id = i64::try_from(result.last_insert_id())
            .map_err(|_| AppError::internal("Category id out of range"))?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::internal(format!("Category {} vanished after insert", id)))
    }

    async fn update(&self, id: i64, name: &str) -> Result<Option<Category>> {
        // MySQL reports zero affected rows when the value is unchanged, so
        // existence is decided by the follow-up read rather than rows_affected.
        sqlx::query(
            r#"
            UPDATE categories
            SET name = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(name)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, name))?;

        self.find_by_id(id).await
    }
}
