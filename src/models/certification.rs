use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::resource::{Collection, Resource};
use crate::schema::{FieldKind, FieldSpec};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certification {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub issuer: String,
    pub year: String,
    pub certificate_url: String,
    pub image_url: String,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Resource for Certification {
    const COLLECTION: Collection = Collection::Certifications;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("title", FieldKind::Text),
        FieldSpec::optional("issuer", FieldKind::Text),
        FieldSpec::optional("year", FieldKind::Text),
        FieldSpec::optional("certificateUrl", FieldKind::Text),
        FieldSpec::optional("imageUrl", FieldKind::Text),
    ];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
