use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ErrorCode;
use crate::domain::customer::errors::EmailError;
use crate::domain::customer::errors::NicknameError;
use crate::domain::customer::errors::PasswordPolicyError;
use crate::domain::customer::models::Email;
use crate::domain::customer::models::Nickname;
use crate::domain::customer::models::Password;
use crate::domain::customer::models::RegisterCustomerCommand;
use crate::inbound::http::router::AppState;

pub async fn register_customer(
    State(state): State<AppState>,
    Json(body): Json<RegisterCustomerRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .customer_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterCustomerRequest {
    email: String,
    password: String,
    nickname: String,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterCustomerRequestError {
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid password: {0}")]
    Password(#[from] PasswordPolicyError),

    #[error("Invalid nickname: {0}")]
    Nickname(#[from] NicknameError),
}

impl RegisterCustomerRequest {
    fn try_into_command(
        self,
    ) -> Result<RegisterCustomerCommand, ParseRegisterCustomerRequestError> {
        let email = Email::new(self.email)?;
        let password = Password::new(self.password)?;
        let nickname = Nickname::new(self.nickname)?;
        Ok(RegisterCustomerCommand::new(email, password, nickname))
    }
}

impl From<ParseRegisterCustomerRequestError> for ApiError {
    fn from(err: ParseRegisterCustomerRequestError) -> Self {
        ApiError::BadRequest(ErrorCode::InvalidFormat, err.to_string())
    }
}
