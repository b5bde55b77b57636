use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::models::CartItemDetail;
use crate::domain::cart::models::CartItemId;
use crate::domain::cart::ports::CartItemRepository;
use crate::domain::customer::models::CustomerId;
use crate::domain::product::models::ProductId;

pub struct PostgresCartItemRepository {
    pool: PgPool,
}

impl PostgresCartItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartItemRepository for PostgresCartItemRepository {
    async fn add(
        &self,
        customer_id: CustomerId,
        product_id: ProductId,
    ) -> Result<CartItemId, CartError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| CartError::DatabaseError(e.to_string()))?;

        let row = sqlx::query(
            r#"
            INSERT INTO cart_items (customer_id, product_id)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(customer_id.0)
        .bind(product_id.0)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("cart_items_customer_id_product_id_key")
                {
                    return CartError::DuplicateCartItem(product_id.0);
                }
                if db_err.is_foreign_key_violation() {
                    return CartError::InvalidProduct(product_id.0);
                }
            }
            CartError::DatabaseError(e.to_string())
        })?;

        tx.commit()
            .await
            .map_err(|e| CartError::DatabaseError(e.to_string()))?;

        Ok(CartItemId(row.get("id")))
    }

    async fn find_details_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<CartItemDetail>, CartError> {
        let rows = sqlx::query(
            r#"
            SELECT ci.id, p.name, p.price, p.image_url, ci.quantity
            FROM cart_items ci
            JOIN products p ON p.id = ci.product_id
            WHERE ci.customer_id = $1
            ORDER BY ci.id
            "#,
        )
        .bind(customer_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CartError::DatabaseError(e.to_string()))?;

        Ok(rows
            .iter()
            .map(|r| CartItemDetail {
                id: CartItemId(r.get("id")),
                name: r.get("name"),
                price: r.get("price"),
                image_url: r.get("image_url"),
                quantity: r.get("quantity"),
            })
            .collect())
    }

    async fn find_ids_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<CartItemId>, CartError> {
        let rows = sqlx::query(
            r#"
            SELECT id
            FROM cart_items
            WHERE customer_id = $1
            ORDER BY id
            "#,
        )
        .bind(customer_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CartError::DatabaseError(e.to_string()))?;

        Ok(rows.iter().map(|r| CartItemId(r.get("id"))).collect())
    }

    async fn find_product_ids_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<ProductId>, CartError> {
        let rows = sqlx::query(
            r#"
            SELECT product_id
            FROM cart_items
            WHERE customer_id = $1
            "#,
        )
        .bind(customer_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CartError::DatabaseError(e.to_string()))?;

        Ok(rows
            .iter()
            .map(|r| ProductId(r.get("product_id")))
            .collect())
    }

    async fn delete(&self, id: CartItemId) -> Result<(), CartError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| CartError::DatabaseError(e.to_string()))?;

        let result = sqlx::query(
            r#"
            DELETE FROM cart_items
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&mut *tx)
        .await
        .map_err(|e| CartError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CartError::NotInCustomerCart(id.0));
        }

        tx.commit()
            .await
            .map_err(|e| CartError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
