use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenCodec;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::customer::models::Email;
use crate::domain::customer::models::Password;
use crate::domain::customer::ports::CustomerRepository;

/// Authentication service: credential check plus token issuance.
///
/// Stateless beyond its injected dependencies; every call is an independent
/// lookup-compare-issue sequence.
pub struct AuthService<CR>
where
    CR: CustomerRepository,
{
    repository: Arc<CR>,
    token_codec: Arc<TokenCodec>,
    password_hasher: PasswordHasher,
}

impl<CR> AuthService<CR>
where
    CR: CustomerRepository,
{
    pub fn new(repository: Arc<CR>, token_codec: Arc<TokenCodec>) -> Self {
        Self {
            repository,
            token_codec,
            password_hasher: PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<CR> AuthServicePort for AuthService<CR>
where
    CR: CustomerRepository,
{
    async fn authenticate(&self, email: &Email, password: &Password) -> Result<String, AuthError> {
        // Unknown email and wrong password collapse into the same error
        let customer = self
            .repository
            .find_by_email(email.as_str())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let matches = self
            .password_hasher
            .verify(password.as_str(), &customer.password_hash)?;
        if !matches {
            tracing::debug!("Password mismatch on login attempt");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.token_codec.issue(customer.email.as_str())?;

        Ok(token)
    }
}
