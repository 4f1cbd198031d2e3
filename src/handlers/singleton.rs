use axum::{extract::State, Extension, Json};
use serde_json::Value;

use crate::error::ClientResult;
use crate::handlers::fields_for;
use crate::resource::Collection;
use crate::schema;
use crate::state::AppState;

/// `{}` until the owner saves the section for the first time
pub async fn get_singleton(
    State(state): State<AppState>,
    Extension(collection): Extension<Collection>,
) -> ClientResult<Json<Value>> {
    let value = state.backend.get_singleton(collection).await?;
    Ok(Json(value))
}

pub async fn update_singleton(
    State(state): State<AppState>,
    Extension(collection): Extension<Collection>,
    Json(mut payload): Json<Value>,
) -> ClientResult<Json<Value>> {
    schema::normalize(fields_for(collection), &mut payload);
    schema::validate_partial(fields_for(collection), &payload)?;

    let value = state.backend.update_singleton(collection, payload).await?;
    Ok(Json(value))
}
