use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use super::jwt::{Claims, JwtKeys};
use crate::{error::ApiError, state::AppState};

// Every rejection uses the same body so a caller cannot tell a missing
// header from a bad signature from an expired token.
fn unauthorized() -> ApiError {
    ApiError::Auth("No autorizado".into())
}

/// Extracts and validates the bearer token, yielding the caller's claims.
#[derive(Debug)]
pub struct AuthUser(pub Claims);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);

        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(unauthorized)?;

        let token = header.strip_prefix("Bearer ").ok_or_else(unauthorized)?;

        let claims = keys.verify(token).map_err(|_| {
            warn!("invalid or expired token");
            unauthorized()
        })?;

        Ok(AuthUser(claims))
    }
}

/// The gate in front of mutating endpoints. When the service runs gated it
/// enforces [`AuthUser`]; when open it admits the request anonymously.
#[derive(Debug)]
pub struct WriteAuth(pub Option<Claims>);

#[async_trait]
impl FromRequestParts<AppState> for WriteAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if !state.config.require_auth {
            return Ok(WriteAuth(None));
        }
        let AuthUser(claims) = AuthUser::from_request_parts(parts, state).await?;
        Ok(WriteAuth(Some(claims)))
    }
}
