use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use tracing::info;

use crate::error::Result;
use crate::options::ConnectionOptions;

/// DDL for the items table, `table` optionally qualified by its database.
/// Category-specific columns stay `NULL` for rows of other categories.
pub fn create_table_sql(table: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {table} (\n\
         id BIGINT AUTO_INCREMENT PRIMARY KEY,\n\
         category VARCHAR(255),\n\
         size INT,\n\
         color VARCHAR(255),\n\
         price DOUBLE,\n\
         material VARCHAR(255),\n\
         sleeves BOOLEAN,\n\
         style VARCHAR(255),\n\
         length VARCHAR(255)\n\
         )"
    )
}

/// Create the configured database and items table when they are missing.
pub async fn bootstrap(options: &ConnectionOptions) -> Result<()> {
    options.validate()?;

    let pool = MySqlPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options.server_connect_options())
        .await?;

    sqlx::raw_sql(&format!("CREATE DATABASE IF NOT EXISTS {}", options.database))
        .execute(&pool)
        .await?;
    info!(event = "database_ready", database = %options.database);

    let qualified = format!("{}.{}", options.database, options.table);
    sqlx::raw_sql(&create_table_sql(&qualified))
        .execute(&pool)
        .await?;
    info!(event = "table_ready", table = %options.table);

    pool.close().await;
    Ok(())
}
