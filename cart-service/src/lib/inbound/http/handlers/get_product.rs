use axum::extract::Path;
use axum::extract::State;
use axum::Json;

use super::list_products::ProductResponseData;
use super::ApiError;
use crate::domain::product::errors::ProductError;
use crate::domain::product::models::ProductId;
use crate::inbound::http::router::AppState;

pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<ProductResponseData>, ApiError> {
    let product_id = ProductId::from_string(&product_id)
        .map_err(|e| ApiError::from(ProductError::from(e)))?;

    state
        .product_service
        .get(&product_id)
        .await
        .map_err(ApiError::from)
        .map(|ref product| Json(product.into()))
}
