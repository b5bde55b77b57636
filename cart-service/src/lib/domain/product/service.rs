use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::NewProduct;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::ProductRepository;
use crate::domain::product::ports::ProductServicePort;

/// Domain service implementation for the product catalog.
pub struct ProductService<PR>
where
    PR: ProductRepository,
{
    repository: Arc<PR>,
}

impl<PR> ProductService<PR>
where
    PR: ProductRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> ProductServicePort for ProductService<PR>
where
    PR: ProductRepository,
{
    async fn list(&self) -> Result<Vec<Product>, ProductError> {
        self.repository.find_all().await
    }

    async fn add(&self, product: NewProduct) -> Result<ProductId, ProductError> {
        let id = self.repository.save(product).await?;
        tracing::info!(product_id = %id, "Product added");
        Ok(id)
    }

    async fn get(&self, id: &ProductId) -> Result<Product, ProductError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id.0))
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ProductError> {
        self.repository.delete(id).await
    }
}
