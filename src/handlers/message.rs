use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::error::ClientResult;
use crate::resource::Collection;
use crate::state::AppState;

pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ClientResult<Json<Value>> {
    let message = state.backend.mark_read(&id).await?;
    Ok(Json(message))
}

/// Unread messages, in arrival order
pub async fn unread(State(state): State<AppState>) -> ClientResult<Json<Vec<Value>>> {
    let messages = state.backend.list(Collection::Messages).await?;

    let unread = messages
        .into_iter()
        .filter(|m| !m.get("read").and_then(Value::as_bool).unwrap_or(false))
        .collect();
    Ok(Json(unread))
}
