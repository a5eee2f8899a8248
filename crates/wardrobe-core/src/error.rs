use thiserror::Error;

/// Core error type shared across Wardrobe crates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The category name is not one of the fixed clothing kinds.
    #[error("invalid item type: {0}")]
    InvalidCategory(String),
    /// A stored row carries no category and cannot be mapped back to an item.
    #[error("record {0} has no category")]
    MissingCategory(i64),
}

/// Convenience alias for results returned by Wardrobe crates.
pub type Result<T> = std::result::Result<T, Error>;
