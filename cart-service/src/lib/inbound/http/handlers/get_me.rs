use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use crate::domain::customer::models::Customer;
use crate::inbound::http::middleware::Principal;
use crate::inbound::http::router::AppState;

pub async fn get_me(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<CustomerResponseData>, ApiError> {
    state
        .customer_service
        .get_by_email(&principal.email)
        .await
        .map_err(ApiError::from)
        .map(|ref customer| Json(customer.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerResponseData {
    pub email: String,
    pub nickname: String,
}

impl From<&Customer> for CustomerResponseData {
    fn from(customer: &Customer) -> Self {
        Self {
            email: customer.email.as_str().to_string(),
            nickname: customer.nickname.as_str().to_string(),
        }
    }
}
