use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use super::{claims::Claims, jwt::JwtKeys, services::authorize};
use crate::error::AppError;

/// Header carrying the session token on protected routes.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Validates the `x-auth-token` header and yields the decoded claims.
pub struct AuthUser(pub Claims);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        let token = match parts.headers.get(AUTH_TOKEN_HEADER) {
            Some(v) => Some(v.to_str().map_err(|_| AppError::InvalidToken)?),
            None => None,
        };
        authorize(&keys, token).map(AuthUser)
    }
}
