use axum::{extract::State, Json};

use crate::error::ClientResult;
use crate::middlewares::AuthUser;
use crate::models::{AuthResponse, LoginRequest, User};
use crate::state::AppState;

/// Login with the configured admin credentials
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ClientResult<Json<AuthResponse>> {
    let response = state.auth.login(&payload)?;
    Ok(Json(response))
}

pub async fn me(AuthUser(user): AuthUser) -> Json<User> {
    Json(user)
}
