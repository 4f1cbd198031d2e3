use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::resource::{Collection, Resource};
use crate::schema::{FieldKind, FieldSpec};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resume {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub resume_pdf_url: String,
    // Free-form entries, owned by the backend
    pub education: Vec<serde_json::Value>,
    pub experience: Vec<serde_json::Value>,
    pub skills: Vec<serde_json::Value>,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Resource for Resume {
    const COLLECTION: Collection = Collection::Resume;
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::optional("resumePdfUrl", FieldKind::Text)];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
