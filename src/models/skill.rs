use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::resource::{Collection, Resource};
use crate::schema::{FieldKind, FieldSpec};

pub const SKILL_CATEGORIES: &[&str] = &[
    "Frontend",
    "Backend",
    "Database",
    "DevOps",
    "Cloud",
    "Mobile",
    "Design",
    "Tools",
    "Languages",
    "Frameworks",
    "Libraries",
    "Testing",
    "Soft Skills",
];

pub const DEFAULT_BULK_CATEGORY: &str = "Other";
pub const DEFAULT_BULK_LEVEL: &str = "Intermediate";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Skill {
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    pub level: String,
    pub icon_url: String,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Skill {
    pub fn draft(name: &str, category: &str, level: &str) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            level: level.to_string(),
            ..Self::default()
        }
    }
}

impl Resource for Skill {
    const COLLECTION: Collection = Collection::Skills;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", FieldKind::Text),
        FieldSpec::optional("category", FieldKind::Text),
        FieldSpec::optional("level", FieldKind::Text),
        FieldSpec::optional("iconUrl", FieldKind::Text),
    ];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Newline-separated bulk entry form for skills
#[derive(Debug, Clone, Default)]
pub struct BulkSkillDraft {
    pub names: String,
    pub categories: String,
    pub levels: String,
}

impl BulkSkillDraft {
    /// Expand into one draft per non-blank name line.
    ///
    /// Category and level are matched by line; a missing line falls back to the
    /// first entry, then to `Other` / `Intermediate`.
    pub fn into_drafts(&self) -> Vec<Skill> {
        let lines = |text: &str| -> Vec<String> {
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect()
        };

        let categories = lines(&self.categories);
        let levels = lines(&self.levels);
        let pick = |values: &[String], index: usize, fallback: &str| {
            values
                .get(index)
                .or_else(|| values.first())
                .cloned()
                .unwrap_or_else(|| fallback.to_string())
        };

        lines(&self.names)
            .into_iter()
            .enumerate()
            .map(|(index, name)| {
                Skill::draft(
                    &name,
                    &pick(&categories, index, DEFAULT_BULK_CATEGORY),
                    &pick(&levels, index, DEFAULT_BULK_LEVEL),
                )
            })
            .collect()
    }
}
