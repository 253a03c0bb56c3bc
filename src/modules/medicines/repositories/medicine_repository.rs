use async_trait::async_trait;
use sqlx::{MySql, MySqlPool, QueryBuilder};

use crate::core::Result;
use crate::modules::medicines::models::Medicine;

/// Medicine lookup by identifier set
#[async_trait]
pub trait MedicineRepository: Send + Sync {
    /// Fetch every medicine whose id is in `ids`, ordered by id.
    /// Unknown ids are simply absent from the result.
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Medicine>>;
}

#[derive(Clone)]
pub struct MySqlMedicineRepository {
    pool: MySqlPool,
}

impl MySqlMedicineRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MedicineRepository for MySqlMedicineRepository {
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Medicine>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let mut query = QueryBuilder::<MySql>::new(
            "SELECT id, name, price, category_id FROM medicines WHERE id IN (",
        );
        let mut separated = query.separated(", ");
        for id in ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(") ORDER BY id");

        let medicines = query
            .build_query_as::<Medicine>()
            .fetch_all(&self.pool)
            .await?;

        Ok(medicines)
    }
}
