use std::fmt;

use crate::domain::cart::errors::CartItemIdError;

/// Cart item unique identifier, assigned by the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CartItemId(pub i64);

impl CartItemId {
    /// Parse a cart item id from its decimal string form.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid integer
    pub fn from_string(s: &str) -> Result<Self, CartItemIdError> {
        s.parse::<i64>()
            .map(CartItemId)
            .map_err(|e| CartItemIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for CartItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Cart item joined with its product data, as listed to the customer.
///
/// At most one cart item exists per (customer, product) pair; the row
/// itself lives only in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemDetail {
    pub id: CartItemId,
    pub name: String,
    pub price: i32,
    pub image_url: String,
    pub quantity: i32,
}
