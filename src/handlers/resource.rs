use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};

use crate::error::ClientResult;
use crate::handlers::fields_for;
use crate::resource::Collection;
use crate::schema;
use crate::state::AppState;

// Every route carries its collection as an `Extension`, so one set of handlers serves all sections

pub async fn list_items(
    State(state): State<AppState>,
    Extension(collection): Extension<Collection>,
) -> ClientResult<Json<Vec<Value>>> {
    let items = state.backend.list(collection).await?;
    Ok(Json(items))
}

/// Public project listing; drafts are only served from `/projects/all`
pub async fn list_published(State(state): State<AppState>) -> ClientResult<Json<Vec<Value>>> {
    let projects = state.backend.list(Collection::Projects).await?;

    let published = projects
        .into_iter()
        .filter(|project| {
            project
                .get("status")
                .and_then(Value::as_str)
                .is_some_and(|status| status.eq_ignore_ascii_case("published"))
        })
        .collect();
    Ok(Json(published))
}

pub async fn get_item(
    State(state): State<AppState>,
    Extension(collection): Extension<Collection>,
    Path(id): Path<String>,
) -> ClientResult<Json<Value>> {
    let item = state.backend.get(collection, &id).await?;
    Ok(Json(item))
}

pub async fn create_item(
    State(state): State<AppState>,
    Extension(collection): Extension<Collection>,
    Json(mut payload): Json<Value>,
) -> ClientResult<(StatusCode, Json<Value>)> {
    schema::normalize(fields_for(collection), &mut payload);
    schema::validate(fields_for(collection), &payload)?;

    let item = state.backend.create(collection, payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_item(
    State(state): State<AppState>,
    Extension(collection): Extension<Collection>,
    Path(id): Path<String>,
    Json(mut payload): Json<Value>,
) -> ClientResult<Json<Value>> {
    schema::normalize(fields_for(collection), &mut payload);
    schema::validate_partial(fields_for(collection), &payload)?;

    let item = state.backend.update(collection, &id, payload).await?;
    Ok(Json(item))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Extension(collection): Extension<Collection>,
    Path(id): Path<String>,
) -> ClientResult<Json<Value>> {
    state.backend.delete(collection, &id).await?;
    Ok(Json(json!({
        "message": format!("{} deleted", collection.label())
    })))
}

pub async fn bulk_create(
    State(state): State<AppState>,
    Extension(collection): Extension<Collection>,
    Json(mut payload): Json<Vec<Value>>,
) -> ClientResult<(StatusCode, Json<Vec<Value>>)> {
    let fields = fields_for(collection);
    for item in &mut payload {
        schema::normalize(fields, item);
        schema::validate(fields, item)?;
    }

    let created = state.backend.bulk_create(collection, payload).await?;
    tracing::info!("Bulk created {} {}", created.len(), collection);
    Ok((StatusCode::CREATED, Json(created)))
}
