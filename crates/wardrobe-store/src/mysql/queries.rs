use sqlx::MySqlPool;
use sqlx::mysql::{MySqlArguments, MySqlQueryResult, MySqlRow};
use sqlx::query::Query;

use wardrobe_core::{InsertStatement, ItemRecord, SqlValue};

use crate::error::Result;

const ITEM_COLUMNS: &str = "id, category, size, color, price, material, sleeves, style, length";

#[derive(sqlx::FromRow)]
struct ItemRow {
    id: i64,
    category: Option<String>,
    size: Option<i32>,
    color: Option<String>,
    price: Option<f64>,
    material: Option<String>,
    sleeves: Option<bool>,
    style: Option<String>,
    length: Option<String>,
}

impl From<ItemRow> for ItemRecord {
    fn from(row: ItemRow) -> Self {
        ItemRecord {
            id: row.id,
            category: row.category,
            size: row.size,
            color: row.color,
            price: row.price,
            material: row.material,
            sleeves: row.sleeves,
            style: row.style,
            length: row.length,
        }
    }
}

pub async fn execute(pool: &MySqlPool, sql: &str) -> Result<Vec<MySqlRow>> {
    Ok(sqlx::query(sql).fetch_all(pool).await?)
}

pub async fn insert(pool: &MySqlPool, statement: &InsertStatement) -> Result<MySqlQueryResult> {
    let sql = statement.placeholder_sql();
    let query = statement
        .values()
        .fold(sqlx::query(&sql), |query, value| bind_value(query, value));
    Ok(query.execute(pool).await?)
}

fn bind_value<'q>(
    query: Query<'q, sqlx::MySql, MySqlArguments>,
    value: &SqlValue,
) -> Query<'q, sqlx::MySql, MySqlArguments> {
    match value {
        SqlValue::Null => query.bind(None::<String>),
        SqlValue::Bool(value) => query.bind(*value),
        SqlValue::Int(value) => query.bind(*value),
        SqlValue::Decimal(value) => query.bind(*value),
        SqlValue::Text(value) => query.bind(value.clone()),
    }
}

pub async fn fetch_all(pool: &MySqlPool, table: &str) -> Result<Vec<ItemRecord>> {
    let sql = format!("SELECT {ITEM_COLUMNS} FROM {table} ORDER BY id");
    let rows = sqlx::query_as::<_, ItemRow>(&sql).fetch_all(pool).await?;
    Ok(rows.into_iter().map(ItemRecord::from).collect())
}

pub async fn fetch_by_id(pool: &MySqlPool, table: &str, id: i64) -> Result<Option<ItemRecord>> {
    let sql = format!("SELECT {ITEM_COLUMNS} FROM {table} WHERE id = ?");
    let row = sqlx::query_as::<_, ItemRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(ItemRecord::from))
}
