use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::domain::product::models::ProductId;
use crate::inbound::http::middleware::Principal;
use crate::inbound::http::router::AppState;

pub async fn add_cart_item(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<AddCartItemRequest>,
) -> Result<(StatusCode, Json<AddCartItemResponseData>), ApiError> {
    let id = state
        .cart_service
        .add_item(&principal.email, ProductId(body.product_id))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AddCartItemResponseData { id: id.0 }),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemRequest {
    product_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddCartItemResponseData {
    pub id: i64,
}
