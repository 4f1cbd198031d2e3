use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::resource::{Collection, Resource};
use crate::schema::{FieldKind, FieldSpec};

/// Supported platforms as `(value, label)`
pub const SOCIAL_PLATFORMS: &[(&str, &str)] = &[
    ("github", "GitHub"),
    ("linkedin", "LinkedIn"),
    ("twitter", "Twitter"),
    ("instagram", "Instagram"),
    ("facebook", "Facebook"),
    ("youtube", "YouTube"),
    ("dribbble", "Dribbble"),
    ("behance", "Behance"),
    ("medium", "Medium"),
    ("devto", "Dev.to"),
    ("stackoverflow", "Stack Overflow"),
    ("codepen", "CodePen"),
    ("leetcode", "LeetCode"),
    ("hackerrank", "HackerRank"),
    ("website", "Website"),
];

const PLATFORM_VALUES: &[&str] = &[
    "github",
    "linkedin",
    "twitter",
    "instagram",
    "facebook",
    "youtube",
    "dribbble",
    "behance",
    "medium",
    "devto",
    "stackoverflow",
    "codepen",
    "leetcode",
    "hackerrank",
    "website",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialLink {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub platform: String,
    pub url: String,
    pub icon_url: String,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Resource for SocialLink {
    const COLLECTION: Collection = Collection::Social;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("platform", FieldKind::Enum(PLATFORM_VALUES)),
        FieldSpec::required("url", FieldKind::Url),
        FieldSpec::optional("iconUrl", FieldKind::Text),
    ];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
