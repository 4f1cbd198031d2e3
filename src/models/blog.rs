use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::resource::{Collection, Resource};
use crate::schema::{FieldKind, FieldSpec};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Blog {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub author: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub url: String,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Resource for Blog {
    const COLLECTION: Collection = Collection::Blogs;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("title", FieldKind::Text),
        FieldSpec::optional("content", FieldKind::Multiline),
        FieldSpec::optional("imageUrl", FieldKind::Text),
        FieldSpec::optional("author", FieldKind::Text),
        FieldSpec::optional("date", FieldKind::Text),
        FieldSpec::optional("url", FieldKind::Url),
    ];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
