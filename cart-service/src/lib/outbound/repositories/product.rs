use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::NewProduct;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::ProductRepository;

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_product(row: &sqlx::postgres::PgRow) -> Product {
        Product {
            id: ProductId(row.get("id")),
            name: row.get("name"),
            price: row.get("price"),
            image_url: row.get("image_url"),
        }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn save(&self, product: NewProduct) -> Result<ProductId, ProductError> {
        let row = sqlx::query(
            r#"
            INSERT INTO products (name, price, image_url)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        Ok(ProductId(row.get("id")))
    }

    async fn find_all(&self) -> Result<Vec<Product>, ProductError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, price, image_url
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        Ok(rows.iter().map(Self::row_to_product).collect())
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, price, image_url
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        Ok(row.as_ref().map(Self::row_to_product))
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ProductError> {
        let result = sqlx::query(
            r#"
            DELETE FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound(id.0));
        }

        Ok(())
    }
}
