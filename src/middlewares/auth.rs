use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::error::ClientError;
use crate::models::User;
use crate::state::AppState;

/// The admin resolved from the request's bearer token
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

// Only available behind `require_admin`, which stores it in the extensions
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ClientError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(ClientError::unauthorized)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Route layer for admin-only routes
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ClientError> {
    let token = bearer_token(request.headers()).ok_or_else(ClientError::unauthorized)?;
    let admin = state.auth.authorize(token)?.clone();

    request.extensions_mut().insert(AuthUser(admin));
    Ok(next.run(request).await)
}
