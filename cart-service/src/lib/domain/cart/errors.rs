use thiserror::Error;

use crate::domain::customer::errors::CustomerError;
use crate::domain::product::errors::ProductError;

/// Error for CartItemId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartItemIdError {
    #[error("Invalid cart item id: {0}")]
    InvalidFormat(String),
}

/// Top-level error for cart operations
#[derive(Debug, Clone, Error)]
pub enum CartError {
    #[error("Invalid cart item id: {0}")]
    InvalidCartItemId(#[from] CartItemIdError),

    /// Principal email resolves to no customer. A token can outlive its
    /// customer record; business routes treat that as an auth failure.
    #[error("No customer for authenticated principal")]
    UnknownCustomer,

    #[error("Product not available for cart: {0}")]
    InvalidProduct(i64),

    #[error("Product is already in the cart: {0}")]
    DuplicateCartItem(i64),

    #[error("Cart item does not belong to the customer: {0}")]
    NotInCustomerCart(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<CustomerError> for CartError {
    fn from(err: CustomerError) -> Self {
        match err {
            CustomerError::DatabaseError(msg) => CartError::DatabaseError(msg),
            other => CartError::DatabaseError(other.to_string()),
        }
    }
}

impl From<ProductError> for CartError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::DatabaseError(msg) => CartError::DatabaseError(msg),
            other => CartError::DatabaseError(other.to_string()),
        }
    }
}
