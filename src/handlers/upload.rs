use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::Deserialize;

use crate::error::{ClientError, ClientResult};
use crate::state::AppState;
use crate::upload::{UploadFile, UploadTarget, Uploaded, FILE_FIELD};

#[derive(Debug, Deserialize)]
pub struct UploadParams {
    pub section: String,
    pub kind: Option<String>,
    pub id: Option<String>,
}

/// Accept one multipart `file` field for `/upload/{section}[/{kind}][/{id}]`
pub async fn upload_file(
    State(state): State<AppState>,
    Path(params): Path<UploadParams>,
    mut multipart: Multipart,
) -> ClientResult<Json<Uploaded>> {
    let target = UploadTarget::from_parts(
        &params.section,
        params.kind.as_deref(),
        params.id.as_deref(),
    );

    let mut file = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ClientError::Validation(format!("Malformed upload: {}", e)))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let name = field.file_name().unwrap_or_default().to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ClientError::Validation(format!("Malformed upload: {}", e)))?;

        file = Some(UploadFile::new(&name, &content_type, bytes.to_vec()));
        break;
    }

    let file = file.ok_or_else(|| ClientError::validation(FILE_FIELD, "is required"))?;
    tracing::debug!("Upload {} ({} bytes) to {}", file.name, file.bytes.len(), target.path());

    let uploaded = state.backend.upload(&target, file).await?;
    Ok(Json(uploaded))
}
