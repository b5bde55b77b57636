use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use crate::domain::product::models::Product;
use crate::inbound::http::router::AppState;

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponseData>>, ApiError> {
    state
        .product_service
        .list()
        .await
        .map_err(ApiError::from)
        .map(|products| Json(products.iter().map(ProductResponseData::from).collect()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponseData {
    pub id: i64,
    pub name: String,
    pub price: i32,
    pub image_url: String,
}

impl From<&Product> for ProductResponseData {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.0,
            name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
        }
    }
}
