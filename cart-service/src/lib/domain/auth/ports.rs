use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::customer::models::Email;
use crate::domain::customer::models::Password;

/// Port for the authentication flow.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and return a signed access token.
    ///
    /// Looks up the customer by email, compares the password against the
    /// stored hash, and issues a token with the email as subject.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (collapsed)
    /// * `Token` - Token issuing failed
    /// * `Customer` - Underlying storage failure
    async fn authenticate(&self, email: &Email, password: &Password) -> Result<String, AuthError>;
}
