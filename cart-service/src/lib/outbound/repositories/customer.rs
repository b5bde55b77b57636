use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::customer::errors::CustomerError;
use crate::domain::customer::models::Customer;
use crate::domain::customer::models::CustomerId;
use crate::domain::customer::models::Email;
use crate::domain::customer::models::NewCustomer;
use crate::domain::customer::models::Nickname;
use crate::domain::customer::ports::CustomerRepository;

pub struct PostgresCustomerRepository {
    pool: PgPool,
}

impl PostgresCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_customer(row: &sqlx::postgres::PgRow) -> Result<Customer, CustomerError> {
        Ok(Customer {
            id: CustomerId(row.get("id")),
            email: Email::new(row.get("email"))?,
            password_hash: row.get("password_hash"),
            nickname: Nickname::new(row.get("nickname"))?,
        })
    }
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    async fn create(&self, customer: NewCustomer) -> Result<Customer, CustomerError> {
        let row = sqlx::query(
            r#"
            INSERT INTO customers (email, password_hash, nickname)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(customer.email.as_str())
        .bind(&customer.password_hash)
        .bind(customer.nickname.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("customers_email_key")
                {
                    return CustomerError::EmailAlreadyExists(
                        customer.email.as_str().to_string(),
                    );
                }
            }
            CustomerError::DatabaseError(e.to_string())
        })?;

        Ok(Customer {
            id: CustomerId(row.get("id")),
            email: customer.email,
            password_hash: customer.password_hash,
            nickname: customer.nickname,
        })
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, CustomerError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, password_hash, nickname
            FROM customers
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CustomerError::DatabaseError(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::row_to_customer(&r)?)),
            None => Ok(None),
        }
    }
}
