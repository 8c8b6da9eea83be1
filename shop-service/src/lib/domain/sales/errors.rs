use thiserror::Error;

/// Top-level error for sales and finance operations
#[derive(Debug, Clone, Error)]
pub enum SalesError {
    #[error("Failed to encode sale items: {0}")]
    ItemsEncoding(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
