use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use crate::domain::cart::models::CartItemDetail;
use crate::inbound::http::middleware::Principal;
use crate::inbound::http::router::AppState;

pub async fn list_cart_items(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<Vec<CartItemResponseData>>, ApiError> {
    state
        .cart_service
        .list_items(&principal.email)
        .await
        .map_err(ApiError::from)
        .map(|items| Json(items.iter().map(CartItemResponseData::from).collect()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemResponseData {
    pub id: i64,
    pub name: String,
    pub price: i32,
    pub image_url: String,
    pub quantity: i32,
}

impl From<&CartItemDetail> for CartItemResponseData {
    fn from(item: &CartItemDetail) -> Self {
        Self {
            id: item.id.0,
            name: item.name.clone(),
            price: item.price,
            image_url: item.image_url.clone(),
            quantity: item.quantity,
        }
    }
}
