//! Persistence for Wardrobe items.
//!
//! Stores are explicit values handed to whoever needs them; there is no
//! process-wide connection.

pub mod adapter;
pub mod error;
pub mod memory;
pub mod mysql;
pub mod options;

pub use adapter::ItemStore;
pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use mysql::{MySqlStore, bootstrap};
pub use options::{ConnectionOptions, RedactedConnection, validate_identifier};
