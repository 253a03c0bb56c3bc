// Category model
//
// A category groups medicines in the catalogue. Names are unique across the
// table; the unique index is the source of truth for that rule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::{AppError, Result};

const MAX_NAME_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /categories`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

/// Body of `PUT /categories`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditCategoryRequest {
    pub id: i64,
    pub name: String,
}

/// Payload returned by `DELETE /categories/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResult {
    pub deleted: u64,
}

/// Trim and validate a category name
///
/// # Returns
/// * `Result<String>` - The trimmed name, or a validation error when it is
///   empty or longer than 255 characters
pub fn validate_category_name(name: &str) -> Result<String> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(AppError::validation("Category name cannot be empty"));
    }

    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(AppError::validation(format!(
            "Category name cannot exceed {} characters",
            MAX_NAME_LENGTH
        )));
    }

    Ok(trimmed.to_string())
}
