use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::resource::{Collection, Resource};
use crate::schema::{FieldKind, FieldSpec};

/// Public contact details shown on the portfolio
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Contact {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Resource for Contact {
    const COLLECTION: Collection = Collection::Contact;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::optional("email", FieldKind::Email),
        FieldSpec::optional("phone", FieldKind::Phone),
        FieldSpec::optional("location", FieldKind::Text),
    ];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
