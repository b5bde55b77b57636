use thiserror::Error;

/// Error for ProductId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductIdError {
    #[error("Invalid product id: {0}")]
    InvalidFormat(String),
}

/// Top-level error for product catalog operations
#[derive(Debug, Clone, Error)]
pub enum ProductError {
    #[error("Invalid product id: {0}")]
    InvalidProductId(#[from] ProductIdError),

    #[error("Product price must not be negative, got {0}")]
    NegativePrice(i32),

    #[error("Product not found: {0}")]
    NotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
