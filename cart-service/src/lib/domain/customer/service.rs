use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::customer::errors::CustomerError;
use crate::domain::customer::models::Customer;
use crate::domain::customer::models::NewCustomer;
use crate::domain::customer::models::RegisterCustomerCommand;
use crate::domain::customer::ports::CustomerRepository;
use crate::domain::customer::ports::CustomerServicePort;

/// Domain service implementation for customer operations.
pub struct CustomerService<CR>
where
    CR: CustomerRepository,
{
    repository: Arc<CR>,
    password_hasher: auth::PasswordHasher,
}

impl<CR> CustomerService<CR>
where
    CR: CustomerRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<CR> CustomerServicePort for CustomerService<CR>
where
    CR: CustomerRepository,
{
    async fn register(&self, command: RegisterCustomerCommand) -> Result<Customer, CustomerError> {
        let password_hash = self
            .password_hasher
            .hash(command.password.as_str())
            .map_err(|e| CustomerError::Unknown(format!("Password hashing failed: {}", e)))?;

        let customer = self
            .repository
            .create(NewCustomer {
                email: command.email,
                password_hash,
                nickname: command.nickname,
            })
            .await?;

        tracing::info!(customer_id = %customer.id, "Customer registered");

        Ok(customer)
    }

    async fn get_by_email(&self, email: &str) -> Result<Customer, CustomerError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| CustomerError::NotFound(email.to_string()))
    }
}
