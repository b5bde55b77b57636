use std::fmt;

use crate::domain::product::errors::ProductError;
use crate::domain::product::errors::ProductIdError;

/// Catalog entry. Owned by no one; referenced by cart items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: i32,
    pub image_url: String,
}

/// Product unique identifier, assigned by the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(pub i64);

impl ProductId {
    /// Parse a product id from its decimal string form.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid integer
    pub fn from_string(s: &str) -> Result<Self, ProductIdError> {
        s.parse::<i64>()
            .map(ProductId)
            .map_err(|e| ProductIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Product data ready for insertion; the id is assigned by storage.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: i32,
    pub image_url: String,
}

impl NewProduct {
    /// Construct a new product, rejecting negative prices.
    ///
    /// # Errors
    /// * `NegativePrice` - Price below zero
    pub fn new(name: String, price: i32, image_url: String) -> Result<Self, ProductError> {
        if price < 0 {
            return Err(ProductError::NegativePrice(price));
        }
        Ok(Self {
            name,
            price,
            image_url,
        })
    }
}
