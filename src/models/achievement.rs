use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::resource::{Collection, Resource};
use crate::schema::{FieldKind, FieldSpec};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Achievement {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub year: String,
    pub icon_url: String,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Resource for Achievement {
    const COLLECTION: Collection = Collection::Achievements;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("title", FieldKind::Text),
        FieldSpec::optional("description", FieldKind::Multiline),
        FieldSpec::optional("year", FieldKind::Text),
        FieldSpec::optional("iconUrl", FieldKind::Text),
    ];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
