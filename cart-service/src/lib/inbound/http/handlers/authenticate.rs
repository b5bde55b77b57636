use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ErrorCode;
use crate::domain::customer::models::Email;
use crate::domain::customer::models::Password;
use crate::inbound::http::router::AppState;

pub async fn authenticate(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<Json<LoginResponseData>, ApiError> {
    // Form validation comes first: a malformed email or password is a
    // format error (1000), not a credential error (1002)
    let email = Email::new(body.email)
        .map_err(|e| ApiError::BadRequest(ErrorCode::InvalidFormat, e.to_string()))?;
    let password = Password::new(body.password)
        .map_err(|e| ApiError::BadRequest(ErrorCode::InvalidFormat, e.to_string()))?;

    let access_token = state.auth_service.authenticate(&email, &password).await?;

    Ok(Json(LoginResponseData { access_token }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseData {
    pub access_token: String,
}
