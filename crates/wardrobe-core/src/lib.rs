//! Core contracts for Wardrobe.
//!
//! This crate defines the clothing item model, the flat row shape persisted to
//! the items table, and the serializer that renders items as insert statements.

pub mod category;
pub mod error;
pub mod item;
pub mod record;
pub mod sql;

pub use category::Category;
pub use error::{Error, Result};
pub use item::{ClothingItem, ItemKind};
pub use record::ItemRecord;
pub use sql::{InsertStatement, SerializeMode, SqlValue, DEFAULT_TABLE};
