use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::resource::{Collection, Resource};
use crate::schema::{FieldKind, FieldSpec};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub full_name: String,
    pub professional_title: String,
    pub tagline: String,
    pub hero_image_url: String,
    pub profile_image_url: String,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Resource for Profile {
    const COLLECTION: Collection = Collection::Profile;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::optional("fullName", FieldKind::Text),
        FieldSpec::optional("professionalTitle", FieldKind::Text),
        FieldSpec::optional("tagline", FieldKind::Text),
        FieldSpec::optional("heroImageUrl", FieldKind::Text),
        FieldSpec::optional("profileImageUrl", FieldKind::Text),
    ];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
