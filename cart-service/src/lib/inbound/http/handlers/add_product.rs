use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::domain::product::models::NewProduct;
use crate::inbound::http::router::AppState;

pub async fn add_product(
    State(state): State<AppState>,
    Json(body): Json<AddProductRequest>,
) -> Result<(StatusCode, Json<AddProductResponseData>), ApiError> {
    let product = NewProduct::new(body.name, body.price, body.image_url)?;

    let id = state.product_service.add(product).await?;

    Ok((
        StatusCode::CREATED,
        Json(AddProductResponseData { id: id.0 }),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddProductRequest {
    name: String,
    price: i32,
    image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddProductResponseData {
    pub id: i64,
}
