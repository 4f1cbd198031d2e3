use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

use crate::format::deserialize_list;
use crate::resource::{Collection, Resource};
use crate::schema::{FieldKind, FieldSpec};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Draft,
    Published,
}

impl ProjectStatus {
    pub fn toggled(&self) -> Self {
        match self {
            Self::Draft => Self::Published,
            Self::Published => Self::Draft,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            other => Err(format!("unknown project status '{}'", other)),
        }
    }
}

// Records written before statuses were normalized may carry any casing
impl<'de> Deserialize<'de> for ProjectStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(deserialize_with = "deserialize_list")]
    pub tech_stack: Vec<String>,
    pub image_url: String,
    pub images: Vec<String>,
    pub video_url: String,
    pub live_url: String,
    pub github_url: String,
    pub status: ProjectStatus,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Resource for Project {
    const COLLECTION: Collection = Collection::Projects;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("title", FieldKind::Text),
        FieldSpec::optional("description", FieldKind::Multiline),
        FieldSpec::optional("techStack", FieldKind::List),
        FieldSpec::optional("imageUrl", FieldKind::Text),
        FieldSpec::optional("images", FieldKind::List),
        FieldSpec::optional("videoUrl", FieldKind::Text),
        FieldSpec::optional("liveUrl", FieldKind::Url),
        FieldSpec::optional("githubUrl", FieldKind::Url),
        FieldSpec::optional("status", FieldKind::Enum(&["draft", "published"])),
    ];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
