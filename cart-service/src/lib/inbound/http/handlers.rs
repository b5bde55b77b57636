use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::auth::errors::AuthError;
use crate::domain::cart::errors::CartError;
use crate::domain::customer::errors::CustomerError;
use crate::domain::product::errors::ProductError;

pub mod add_cart_item;
pub mod add_product;
pub mod authenticate;
pub mod delete_cart_item;
pub mod delete_product;
pub mod get_me;
pub mod get_product;
pub mod list_cart_items;
pub mod list_products;
pub mod register_customer;

/// Application-level error codes carried in every error response body.
///
/// 1000 (invalid format) and 1002 (invalid credentials) are contract with
/// existing clients; the remaining codes extend the same numbering scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidFormat = 1000,
    DuplicateEmail = 1001,
    InvalidCredentials = 1002,
    Unauthorized = 2001,
    InvalidProduct = 3001,
    DuplicateCartItem = 3002,
    NotInCustomerCart = 3003,
    ProductNotFound = 4001,
    Internal = 5000,
}

impl ErrorCode {
    pub fn as_u16(self) -> u16 {
        self as u16
    }
}

/// Error response wire shape: `{"errorCode": int, "message": string}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error_code: u16,
    pub message: String,
}

/// HTTP boundary error. Each domain error kind maps to exactly one status
/// and error code here; the domain layer never formats responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(ErrorCode, String),
    Unauthorized(String),
    NotFound(ErrorCode, String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::BadRequest(code, msg) => (StatusCode::BAD_REQUEST, code, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, ErrorCode::Unauthorized, msg),
            ApiError::NotFound(code, msg) => (StatusCode::NOT_FOUND, code, msg),
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::Internal, msg)
            }
        };

        (
            status,
            Json(ErrorBody {
                error_code: code.as_u16(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<CustomerError> for ApiError {
    fn from(err: CustomerError) -> Self {
        match err {
            CustomerError::InvalidEmail(_)
            | CustomerError::InvalidPassword(_)
            | CustomerError::InvalidNickname(_) => {
                ApiError::BadRequest(ErrorCode::InvalidFormat, err.to_string())
            }
            CustomerError::EmailAlreadyExists(_) => {
                ApiError::BadRequest(ErrorCode::DuplicateEmail, err.to_string())
            }
            // A valid token whose subject no longer resolves is an auth
            // failure, not a 404: the route is principal-scoped
            CustomerError::NotFound(_) => {
                ApiError::Unauthorized("No customer for authenticated principal".to_string())
            }
            CustomerError::DatabaseError(_) | CustomerError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                ApiError::BadRequest(ErrorCode::InvalidCredentials, err.to_string())
            }
            AuthError::Password(_) | AuthError::Token(_) | AuthError::Customer(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::InvalidProductId(_) | ProductError::NegativePrice(_) => {
                ApiError::BadRequest(ErrorCode::InvalidFormat, err.to_string())
            }
            ProductError::NotFound(_) => {
                ApiError::NotFound(ErrorCode::ProductNotFound, err.to_string())
            }
            ProductError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<CartError> for ApiError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::InvalidCartItemId(_) => {
                ApiError::BadRequest(ErrorCode::InvalidFormat, err.to_string())
            }
            CartError::UnknownCustomer => ApiError::Unauthorized(err.to_string()),
            CartError::InvalidProduct(_) => {
                ApiError::BadRequest(ErrorCode::InvalidProduct, err.to_string())
            }
            CartError::DuplicateCartItem(_) => {
                ApiError::BadRequest(ErrorCode::DuplicateCartItem, err.to_string())
            }
            CartError::NotInCustomerCart(_) => {
                ApiError::BadRequest(ErrorCode::NotInCustomerCart, err.to_string())
            }
            CartError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}
