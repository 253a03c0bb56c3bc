use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Page size used when the caller does not send `rowsPerPage`
pub const DEFAULT_ROWS_PER_PAGE: u32 = 10;

/// Upper bound on a single page
pub const MAX_ROWS_PER_PAGE: u32 = 100;

/// Query parameters accepted by every list endpoint
///
/// `page` is one-based, except that `page=0` is accepted and maps to the
/// first row as well.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page: Option<u32>,
    pub rows_per_page: Option<u32>,
}

/// Resolved LIMIT/OFFSET pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: u32,
    pub offset: u64,
}

impl PageQuery {
    pub fn new(page: Option<u32>, rows_per_page: Option<u32>) -> Self {
        Self {
            page,
            rows_per_page,
        }
    }

    /// Translate page/rowsPerPage into a LIMIT/OFFSET window
    pub fn window(&self) -> Result<PageWindow> {
        let Some(rows_per_page) = self.rows_per_page else {
            return Ok(PageWindow {
                limit: DEFAULT_ROWS_PER_PAGE,
                offset: 0,
            });
        };

        if rows_per_page == 0 {
            return Err(AppError::validation("rowsPerPage must be greater than 0"));
        }

        let limit = rows_per_page.min(MAX_ROWS_PER_PAGE);
        let offset = match self.page.unwrap_or(1) {
            0 => 0,
            page => u64::from(page - 1) * u64::from(limit),
        };

        Ok(PageWindow { limit, offset })
    }
}

/// One page of rows plus the total row count of the table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub count: i64,
}
