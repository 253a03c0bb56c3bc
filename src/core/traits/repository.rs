use async_trait::async_trait;

use crate::core::{PageWindow, Result};

/// Read/delete operations shared by every table-backed repository
///
/// Creation and updates differ per entity (categories insert by name, orders
/// go through a unit of work), so they live on the entity-specific traits.
#[async_trait]
pub trait Repository<T, ID>: Send + Sync {
    /// Find entity by ID
    async fn find_by_id(&self, id: ID) -> Result<Option<T>>;

    /// List one page of entities
    async fn list(&self, window: PageWindow) -> Result<Vec<T>>;

    /// Total number of rows, independent of paging
    async fn count(&self) -> Result<i64>;

    /// Delete an entity by ID, returning the number of rows removed
    async fn delete(&self, id: ID) -> Result<u64>;
}
