//! Rendering of clothing items as `INSERT` statements.
//!
//! String values are interpolated between single quotes without escaping.
//! Rendered statements are meant for trusted demo data only; the store binds
//! parameters through [`InsertStatement::placeholder_sql`] for its own writes.

use std::fmt;

use crate::item::{ClothingItem, ItemKind};

/// Table written to when the caller does not configure one.
pub const DEFAULT_TABLE: &str = "Clothes";

/// Columns emitted by [`SerializeMode::FixedColumns`], for every category.
const FIXED_COLUMNS: [&str; 7] = ["id", "category", "size", "color", "price", "material", "style"];

/// How an item's attributes are mapped to columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SerializeMode {
    /// Columns of the item's own variant, in a fixed order, skipping unset values.
    #[default]
    SetAttributes,
    /// The legacy fixed column list; unset values render as `NULL`.
    ///
    /// The list carries `style` but neither `sleeves` nor `length`, so the
    /// extra attribute of tops and bottoms is not written in this mode.
    FixedColumns,
}

/// A single value in a rendered statement.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Int(i64),
    Decimal(f64),
    Text(String),
}

impl SqlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => f.write_str("NULL"),
            SqlValue::Bool(true) => f.write_str("TRUE"),
            SqlValue::Bool(false) => f.write_str("FALSE"),
            SqlValue::Int(value) => write!(f, "{value}"),
            // MySQL has no literal for NaN or infinity.
            SqlValue::Decimal(value) if !value.is_finite() => f.write_str("NULL"),
            SqlValue::Decimal(value) if value.fract() == 0.0 => write!(f, "{value:.1}"),
            SqlValue::Decimal(value) => write!(f, "{value}"),
            SqlValue::Text(value) => write!(f, "'{value}'"),
        }
    }
}

impl From<Option<i64>> for SqlValue {
    fn from(value: Option<i64>) -> Self {
        value.map_or(SqlValue::Null, SqlValue::Int)
    }
}

impl From<Option<i32>> for SqlValue {
    fn from(value: Option<i32>) -> Self {
        value.map_or(SqlValue::Null, |v| SqlValue::Int(i64::from(v)))
    }
}

impl From<Option<f64>> for SqlValue {
    fn from(value: Option<f64>) -> Self {
        value
            .filter(|v| v.is_finite())
            .map_or(SqlValue::Null, SqlValue::Decimal)
    }
}

impl From<Option<bool>> for SqlValue {
    fn from(value: Option<bool>) -> Self {
        value.map_or(SqlValue::Null, SqlValue::Bool)
    }
}

impl From<Option<&str>> for SqlValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(SqlValue::Null, |v| SqlValue::Text(v.to_string()))
    }
}

/// An `INSERT` statement with column names and values kept pairwise.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    table: String,
    entries: Vec<(&'static str, SqlValue)>,
}

impl InsertStatement {
    /// Serialize `item` into an insert for `table`.
    pub fn for_item(item: &ClothingItem, table: &str, mode: SerializeMode) -> Self {
        let entries = match mode {
            SerializeMode::SetAttributes => attribute_entries(item)
                .into_iter()
                .filter(|(_, value)| !value.is_null())
                .collect(),
            SerializeMode::FixedColumns => FIXED_COLUMNS
                .iter()
                .map(|column| (*column, fixed_value(item, column)))
                .collect(),
        };

        Self {
            table: table.to_string(),
            entries,
        }
    }

    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(column, _)| *column)
    }

    pub fn values(&self) -> impl Iterator<Item = &SqlValue> + '_ {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Same statement with `?` placeholders in place of the values.
    pub fn placeholder_sql(&self) -> String {
        let placeholders = vec!["?"; self.entries.len()].join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({placeholders})",
            self.table,
            self.columns().collect::<Vec<_>>().join(", ")
        )
    }
}

impl fmt::Display for InsertStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = self.columns().collect::<Vec<_>>().join(", ");
        let values = self
            .values()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "INSERT INTO {} ({columns}) VALUES ({values})", self.table)
    }
}

impl ClothingItem {
    /// Render this item as an insert into `table`.
    pub fn to_insert(&self, table: &str, mode: SerializeMode) -> InsertStatement {
        InsertStatement::for_item(self, table, mode)
    }
}

/// Every column of the item's variant, in table order, set or not.
fn attribute_entries(item: &ClothingItem) -> Vec<(&'static str, SqlValue)> {
    let mut entries = vec![
        ("id", SqlValue::from(item.id)),
        ("category", SqlValue::Text(item.category().as_str().to_string())),
        ("size", SqlValue::from(item.size)),
        ("color", SqlValue::from(item.color.as_deref())),
        ("price", SqlValue::from(item.price)),
        ("material", SqlValue::from(item.material.as_deref())),
    ];

    if let Some(column) = item.category().extra_column() {
        let value = match &item.kind {
            ItemKind::Top { sleeves } => SqlValue::from(*sleeves),
            ItemKind::Headwear { style } => SqlValue::from(style.as_deref()),
            ItemKind::Bottoms { length } => SqlValue::from(length.as_deref()),
            ItemKind::Footwear => SqlValue::Null,
        };
        entries.push((column, value));
    }

    entries
}

fn fixed_value(item: &ClothingItem, column: &str) -> SqlValue {
    match column {
        "id" => SqlValue::from(item.id),
        "category" => SqlValue::Text(item.category().as_str().to_string()),
        "size" => SqlValue::from(item.size),
        "color" => SqlValue::from(item.color.as_deref()),
        "price" => SqlValue::from(item.price),
        "material" => SqlValue::from(item.material.as_deref()),
        "style" => SqlValue::from(item.style()),
        _ => SqlValue::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_values_by_type() {
        assert_eq!(SqlValue::Null.to_string(), "NULL");
        assert_eq!(SqlValue::Bool(true).to_string(), "TRUE");
        assert_eq!(SqlValue::Int(40).to_string(), "40");
        assert_eq!(SqlValue::Decimal(25.5).to_string(), "25.5");
        assert_eq!(SqlValue::Decimal(10.0).to_string(), "10.0");
        assert_eq!(SqlValue::Text("Red".to_string()).to_string(), "'Red'");
    }

    #[test]
    fn non_finite_prices_render_as_null() {
        assert_eq!(SqlValue::Decimal(f64::NAN).to_string(), "NULL");
        assert_eq!(SqlValue::Decimal(f64::INFINITY).to_string(), "NULL");
        assert_eq!(SqlValue::from(Some(f64::NEG_INFINITY)), SqlValue::Null);

        let item = ClothingItem::new(ItemKind::Footwear)
            .with_id(21)
            .with_price(f64::NAN);
        assert_eq!(
            item.to_insert(DEFAULT_TABLE, SerializeMode::SetAttributes)
                .to_string(),
            "INSERT INTO Clothes (id, category) VALUES (21, 'Footwear')"
        );
        assert_eq!(
            item.to_insert(DEFAULT_TABLE, SerializeMode::FixedColumns)
                .to_string(),
            "INSERT INTO Clothes (id, category, size, color, price, material, style) \
             VALUES (21, 'Footwear', NULL, NULL, NULL, NULL, NULL)"
        );
    }

    #[test]
    fn placeholders_match_columns() {
        let item = ClothingItem::new(ItemKind::Footwear)
            .with_id(2_555)
            .with_size(42);
        let statement = item.to_insert("shoes", SerializeMode::SetAttributes);
        assert_eq!(
            statement.placeholder_sql(),
            "INSERT INTO shoes (id, category, size) VALUES (?, ?, ?)"
        );
    }
}
