use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::resource::{Collection, Resource};
use crate::schema::{FieldKind, FieldSpec};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct About {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub bio: String,
    pub highlights: Vec<String>,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<OffsetDateTime>,
}

impl About {
    /// Drop blank highlight rows left over from the editor
    pub fn without_blank_highlights(mut self) -> Self {
        self.highlights.retain(|h| !h.trim().is_empty());
        self
    }
}

impl Resource for About {
    const COLLECTION: Collection = Collection::About;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::optional("bio", FieldKind::Multiline),
        FieldSpec::optional("highlights", FieldKind::List),
    ];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
