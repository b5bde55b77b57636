use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// The authenticated identity for one request: the token's subject email,
/// reconstructed fresh on every protected request. No server-side session.
#[derive(Debug, Clone)]
pub struct Principal {
    pub email: String,
}

/// Middleware resolving the request principal from the bearer token.
///
/// Runs before the business handler on every protected route. Verifies the
/// token signature and expiry, then binds the subject email into request
/// extensions. Never consults the credential store: a still-valid token
/// authenticates even if the customer record has since changed.
pub async fn resolve_principal(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let email = state.token_codec.decode(token).map_err(|e| {
        tracing::warn!("Token validation failed: {}", e);
        ApiError::Unauthorized("Invalid or expired token".to_string()).into_response()
    })?;

    req.extensions_mut().insert(Principal { email });

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let auth_header = req.headers().get(header::AUTHORIZATION).ok_or_else(|| {
        ApiError::Unauthorized("Missing Authorization header".to_string()).into_response()
    })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        ApiError::Unauthorized("Invalid Authorization header".to_string()).into_response()
    })?;

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError::Unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
        )
        .into_response()
    })
}
