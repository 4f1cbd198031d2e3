//! Display and normalisation helpers shared by the sections.

use serde::{Deserialize, Deserializer};

use crate::models::SocialLink;

/// Split a comma-separated string into trimmed, non-empty items
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Accept either a JSON array of strings or a comma-separated string
pub fn deserialize_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ListOrText {
        List(Vec<String>),
        Text(String),
        Null(()),
    }

    Ok(match ListOrText::deserialize(deserializer)? {
        ListOrText::List(items) => items,
        ListOrText::Text(text) => split_list(&text),
        ListOrText::Null(()) => Vec::new(),
    })
}

/// Explicit period if set, else `"{start} - {end}"` with an open end shown as `Present`
pub fn period(explicit: &str, start: &str, end: &str) -> String {
    if !explicit.trim().is_empty() {
        return explicit.to_string();
    }
    let end = if end.trim().is_empty() { "Present" } else { end };
    format!("{} - {}", start, end)
}

const ICON_BASE: &str = "https://cdn.jsdelivr.net/npm/simple-icons@v5/icons";
const ICON_PLATFORMS: &[&str] = &[
    "github",
    "linkedin",
    "twitter",
    "instagram",
    "facebook",
    "youtube",
    "dribbble",
    "behance",
    "medium",
];

/// Default icon URL for a platform, empty when none is bundled
pub fn social_icon(platform: &str) -> String {
    let platform = platform.to_lowercase();
    if ICON_PLATFORMS.contains(&platform.as_str()) {
        format!("{}/{}.svg", ICON_BASE, platform)
    } else {
        String::new()
    }
}

/// Lower-case the platform and fill a missing icon
pub fn normalize_social_link(mut link: SocialLink) -> SocialLink {
    link.platform = link.platform.to_lowercase();
    if link.icon_url.trim().is_empty() {
        link.icon_url = social_icon(&link.platform);
    }
    link
}

/// Shorten preview text to `max` characters, appending `...`
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}...", cut.trim_end())
}

/// Badge colour for a skill level
pub fn level_color(level: &str) -> &'static str {
    match level.to_lowercase().as_str() {
        "beginner" => "#4caf50",
        "intermediate" => "#ff9800",
        "advanced" => "#2196f3",
        "expert" => "#9c27b0",
        _ => "#9e9e9e",
    }
}
