use thiserror::Error;

use crate::domain::customer::errors::CustomerError;

/// Error for the authentication flow.
///
/// Unknown email and wrong password both surface as `InvalidCredentials`;
/// callers cannot distinguish them.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] auth::TokenError),

    #[error(transparent)]
    Customer(#[from] CustomerError),
}
