use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::resource::{Collection, Resource};
use crate::schema::{FieldKind, FieldSpec};

/// Visitor message submitted from the public contact form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub message: String,
    /// Only ever moves from `false` to `true` on the client
    pub read: bool,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Message {
    pub fn is_unread(&self) -> bool {
        !self.read
    }

    /// Case-insensitive match against sender name, email and body
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        [&self.name, &self.email, &self.message]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}

impl Resource for Message {
    const COLLECTION: Collection = Collection::Messages;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::optional("name", FieldKind::Text),
        FieldSpec::optional("email", FieldKind::Email),
        FieldSpec::optional("message", FieldKind::Multiline),
        FieldSpec::optional("read", FieldKind::Boolean),
    ];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
