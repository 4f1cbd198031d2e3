use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::resource::{Collection, Resource};
use crate::schema::{FieldKind, FieldSpec};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub degree: String,
    pub institution: String,
    /// Free text such as `2018 - 2022`; see [`crate::format::period`]
    pub period: String,
    pub description: String,
    pub certificate_url: String,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Resource for Education {
    const COLLECTION: Collection = Collection::Education;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("degree", FieldKind::Text),
        FieldSpec::required("institution", FieldKind::Text),
        FieldSpec::optional("period", FieldKind::Text),
        FieldSpec::optional("description", FieldKind::Multiline),
        FieldSpec::optional("certificateUrl", FieldKind::Text),
    ];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
