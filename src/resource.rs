use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::{ClientError, ClientResult};
use crate::schema::FieldSpec;

/// Wire name of the server-assigned identifier
pub const ID_FIELD: &str = "_id";

/// Named REST collection backing one dashboard section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Profile,
    About,
    Skills,
    Projects,
    Achievements,
    Education,
    Certifications,
    Experience,
    Blogs,
    Testimonials,
    Resume,
    Contact,
    Social,
    Messages,
}

impl Collection {
    pub const ALL: [Collection; 14] = [
        Self::Profile,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Achievements,
        Self::Education,
        Self::Certifications,
        Self::Experience,
        Self::Blogs,
        Self::Testimonials,
        Self::Resume,
        Self::Contact,
        Self::Social,
        Self::Messages,
    ];

    /// Base path segment, e.g. `skills` for `/skills`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Achievements => "achievements",
            Self::Education => "education",
            Self::Certifications => "certifications",
            Self::Experience => "experience",
            Self::Blogs => "blogs",
            Self::Testimonials => "testimonials",
            Self::Resume => "resume",
            Self::Contact => "contact",
            Self::Social => "social",
            Self::Messages => "messages",
        }
    }

    /// One-per-owner resources: only `GET`/`PUT /{collection}`
    pub fn is_singleton(&self) -> bool {
        matches!(
            self,
            Self::Profile | Self::About | Self::Resume | Self::Contact
        )
    }

    /// Path used to list the collection. Projects list from `/projects/all`
    /// so drafts are included.
    pub fn list_path(&self) -> String {
        match self {
            Self::Projects => "projects/all".to_string(),
            other => other.as_str().to_string(),
        }
    }

    pub fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.as_str(), id)
    }

    /// Human label used in `NotFound` errors
    pub fn label(&self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::About => "About",
            Self::Skills => "Skill",
            Self::Projects => "Project",
            Self::Achievements => "Achievement",
            Self::Education => "Education",
            Self::Certifications => "Certification",
            Self::Experience => "Experience",
            Self::Blogs => "Blog",
            Self::Testimonials => "Testimonial",
            Self::Resume => "Resume",
            Self::Contact => "Contact",
            Self::Social => "Social link",
            Self::Messages => "Message",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ClientError::NotFound(format!("Collection '{}'", s)))
    }
}

/// One typed item of a collection.
///
/// Implementors are plain serde structs; the store and client share one merge
/// algorithm across all of them.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const COLLECTION: Collection;

    /// Field table used for client-side validation
    const FIELDS: &'static [FieldSpec];

    /// Server-assigned id, `None` for unsaved drafts
    fn id(&self) -> Option<&str>;
}

/// Read the id of a raw JSON resource, accepting both `_id` and `id`
pub fn raw_id(value: &Value) -> Option<&str> {
    value
        .get(ID_FIELD)
        .or_else(|| value.get("id"))
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
}

/// Decode a raw resource into its section type.
///
/// A record carrying both `_id` and `id` keeps `_id`.
pub fn decode<T: Resource>(mut value: Value) -> ClientResult<T> {
    if let Some(object) = value.as_object_mut() {
        if object.contains_key(ID_FIELD) {
            object.remove("id");
        }
    }
    Ok(serde_json::from_value(value)?)
}

/// Decode a server response that must carry an id (create/update/bulk results)
pub fn decode_persisted<T: Resource>(value: Value) -> ClientResult<T> {
    let item: T = decode(value)?;
    if item.id().is_none() {
        return Err(ClientError::server(
            500,
            format!("{} returned without an id", T::COLLECTION.label()),
        ));
    }
    Ok(item)
}

/// Encode a draft as a JSON object, dropping the id and server timestamps
pub fn encode_draft<T: Resource>(draft: &T) -> ClientResult<Value> {
    let mut value = serde_json::to_value(draft)?;
    if let Some(object) = value.as_object_mut() {
        object.remove(ID_FIELD);
        object.remove("id");
        object.remove("createdAt");
        object.remove("updatedAt");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collection_paths() {
        assert_eq!(Collection::Skills.list_path(), "skills");
        assert_eq!(Collection::Projects.list_path(), "projects/all");
        assert_eq!(Collection::Blogs.item_path("42"), "blogs/42");
        assert!(Collection::Profile.is_singleton());
        assert!(!Collection::Messages.is_singleton());
    }

    #[test]
    fn test_collection_from_str() {
        for collection in Collection::ALL {
            assert_eq!(collection.as_str().parse::<Collection>().unwrap(), collection);
        }
        assert!("users".parse::<Collection>().is_err());
    }

    #[test]
    fn test_decode_prefers_underscore_id() {
        let project: crate::models::Project =
            decode(json!({ "_id": "1", "id": "other", "title": "X" })).unwrap();
        assert_eq!(project.id.as_deref(), Some("1"));

        let project: crate::models::Project = decode(json!({ "id": "2" })).unwrap();
        assert_eq!(project.id.as_deref(), Some("2"));
    }

    #[test]
    fn test_raw_id_accepts_both_spellings() {
        assert_eq!(raw_id(&json!({ "_id": "a1" })), Some("a1"));
        assert_eq!(raw_id(&json!({ "id": "b2" })), Some("b2"));
        assert_eq!(raw_id(&json!({ "_id": "" })), None);
        assert_eq!(raw_id(&json!({ "title": "x" })), None);
    }
}
