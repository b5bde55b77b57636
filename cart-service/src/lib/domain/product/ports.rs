use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::NewProduct;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;

/// Port for product catalog operations.
#[async_trait]
pub trait ProductServicePort: Send + Sync + 'static {
    /// List the whole catalog.
    async fn list(&self) -> Result<Vec<Product>, ProductError>;

    /// Add a product and return its assigned id.
    async fn add(&self, product: NewProduct) -> Result<ProductId, ProductError>;

    /// Retrieve a product by id.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    async fn get(&self, id: &ProductId) -> Result<Product, ProductError>;

    /// Delete a product by id.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    async fn delete(&self, id: &ProductId) -> Result<(), ProductError>;
}

/// Persistence operations for the product catalog.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Persist a new product; storage assigns the id.
    async fn save(&self, product: NewProduct) -> Result<ProductId, ProductError>;

    /// Retrieve all products.
    async fn find_all(&self) -> Result<Vec<Product>, ProductError>;

    /// Retrieve a product by id.
    ///
    /// # Returns
    /// Optional product (None if not found)
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError>;

    /// Remove a product.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    async fn delete(&self, id: &ProductId) -> Result<(), ProductError>;
}
