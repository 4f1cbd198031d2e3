use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::resource::{Collection, Resource};
use crate::schema::{FieldKind, FieldSpec};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Resource for Experience {
    const COLLECTION: Collection = Collection::Experience;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("role", FieldKind::Text),
        FieldSpec::required("company", FieldKind::Text),
        FieldSpec::optional("period", FieldKind::Text),
        FieldSpec::optional("description", FieldKind::Multiline),
    ];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
