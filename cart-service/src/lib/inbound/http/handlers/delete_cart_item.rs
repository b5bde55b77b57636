use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::models::CartItemId;
use crate::inbound::http::middleware::Principal;
use crate::inbound::http::router::AppState;

pub async fn delete_cart_item(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(cart_item_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let cart_item_id = CartItemId::from_string(&cart_item_id)
        .map_err(|e| ApiError::from(CartError::from(e)))?;

    state
        .cart_service
        .delete_item(&principal.email, cart_item_id)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
