use async_trait::async_trait;

use crate::domain::customer::errors::CustomerError;
use crate::domain::customer::models::Customer;
use crate::domain::customer::models::NewCustomer;
use crate::domain::customer::models::RegisterCustomerCommand;

/// Port for customer domain service operations.
#[async_trait]
pub trait CustomerServicePort: Send + Sync + 'static {
    /// Register a new customer with validated credentials.
    ///
    /// The plaintext password is hashed before it reaches storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterCustomerCommand) -> Result<Customer, CustomerError>;

    /// Retrieve a customer by email address.
    ///
    /// # Errors
    /// * `NotFound` - No customer with this email
    /// * `DatabaseError` - Database operation failed
    async fn get_by_email(&self, email: &str) -> Result<Customer, CustomerError>;
}

/// Persistence operations for the customer aggregate.
#[async_trait]
pub trait CustomerRepository: Send + Sync + 'static {
    /// Persist a new customer; storage assigns the id.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Unique email constraint violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, customer: NewCustomer) -> Result<Customer, CustomerError>;

    /// Retrieve a customer by email address.
    ///
    /// # Returns
    /// Optional customer entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, CustomerError>;
}
