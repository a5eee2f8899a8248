use thiserror::Error;

/// Errors surfaced by item stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("duplicate id: {0}")]
    DuplicateId(i64),
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
    #[error("insert id {0} does not fit in a signed 64-bit id")]
    InsertIdOutOfRange(u64),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
