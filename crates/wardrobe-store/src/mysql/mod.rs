use std::time::Duration;

use async_trait::async_trait;
use sqlx::MySqlPool;
use sqlx::mysql::{MySqlPoolOptions, MySqlRow};
use tracing::{debug, info};

use wardrobe_core::{ClothingItem, ItemRecord, SerializeMode};

use crate::adapter::ItemStore;
use crate::error::{Result, StoreError};
use crate::options::ConnectionOptions;

mod bootstrap;
mod queries;

pub use bootstrap::{bootstrap, create_table_sql};

/// Store backed by a MySQL table.
#[derive(Debug, Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
    table: String,
}

impl MySqlStore {
    /// Wrap a pre-configured pool. `table` must be a plain identifier.
    pub fn new(pool: MySqlPool, table: impl Into<String>) -> Self {
        Self {
            pool,
            table: table.into(),
        }
    }

    pub async fn connect(options: &ConnectionOptions) -> Result<Self> {
        options.validate()?;

        let pool = MySqlPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(10))
            .connect_with(options.connect_options())
            .await?;
        let store = Self::new(pool, options.table.clone());
        info!(
            event = "connected",
            engine = store.engine(),
            url = %options.redacted().redacted,
            table = %store.table
        );
        Ok(store)
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Run a raw statement, such as one rendered by the serializer.
    pub async fn execute_query(&self, sql: &str) -> Result<Vec<MySqlRow>> {
        let rows = queries::execute(&self.pool, sql).await?;
        debug!(event = "query_executed", rows = rows.len());
        Ok(rows)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl ItemStore for MySqlStore {
    fn engine(&self) -> &'static str {
        "mysql"
    }

    async fn insert_item(&self, item: &ClothingItem) -> Result<i64> {
        let statement = item.to_insert(&self.table, SerializeMode::SetAttributes);
        let result = queries::insert(&self.pool, &statement).await?;
        let id = stored_id(item.id, result.last_insert_id())?;
        debug!(event = "item_inserted", id, category = %item.category());
        Ok(id)
    }

    async fn fetch_all_data(&self) -> Result<Vec<ItemRecord>> {
        queries::fetch_all(&self.pool, &self.table).await
    }

    async fn fetch_item_by_id(&self, id: i64) -> Result<Option<ItemRecord>> {
        queries::fetch_by_id(&self.pool, &self.table, id).await
    }
}

/// The id a row ended up with: the item's own, or the one MySQL assigned.
fn stored_id(item_id: Option<i64>, last_insert_id: u64) -> Result<i64> {
    match item_id {
        Some(id) => Ok(id),
        None => i64::try_from(last_insert_id)
            .map_err(|_| StoreError::InsertIdOutOfRange(last_insert_id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_id_wins_over_assigned_one() {
        assert_eq!(stored_id(Some(1_042), 7).ok(), Some(1_042));
        assert_eq!(stored_id(None, 7).ok(), Some(7));
    }

    #[test]
    fn assigned_id_beyond_i64_is_an_error() {
        let err = stored_id(None, u64::MAX).expect_err("out of range");
        assert!(matches!(err, StoreError::InsertIdOutOfRange(u64::MAX)));
    }
}
