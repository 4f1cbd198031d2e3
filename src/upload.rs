//! Multipart upload targets and pre-flight file checks.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Multipart form field carrying the file
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Video,
    Document,
    Resume,
}

impl FileKind {
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Image => &["jpg", "jpeg", "png", "gif", "webp", "svg"],
            Self::Video => &["mp4", "webm", "mov", "avi"],
            Self::Document => &["pdf", "doc", "docx", "txt"],
            Self::Resume => &["pdf", "doc", "docx"],
        }
    }
}

/// Where an upload goes: `/upload/{section}[/{kind}][/{id}]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    pub section: String,
    pub kind: Option<String>,
    pub id: Option<String>,
    pub accepts: FileKind,
}

impl UploadTarget {
    pub fn new(section: &str, kind: &str, accepts: FileKind) -> Self {
        Self {
            section: section.to_string(),
            kind: Some(kind.to_string()),
            id: None,
            accepts,
        }
    }

    /// Rebuild a target from its path segments, inferring the accepted kind
    pub fn from_parts(section: &str, kind: Option<&str>, id: Option<&str>) -> Self {
        let accepts = match (section, kind) {
            ("resume", _) => FileKind::Resume,
            ("education", Some("certificate")) | ("certifications", Some("cert")) => {
                FileKind::Document
            }
            ("project", _) => FileKind::Image,
            (_, Some("video")) => FileKind::Video,
            _ => FileKind::Image,
        };

        Self {
            section: section.to_string(),
            kind: kind.map(str::to_string),
            id: id.map(str::to_string),
            accepts,
        }
    }

    pub fn for_item(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn profile_photo() -> Self {
        Self::new("profile", "photo", FileKind::Image)
    }

    pub fn profile_hero() -> Self {
        Self::new("profile", "hero", FileKind::Image)
    }

    pub fn resume_file() -> Self {
        Self::new("resume", "file", FileKind::Resume)
    }

    pub fn project_media() -> Self {
        Self {
            section: "project".to_string(),
            kind: None,
            id: None,
            accepts: FileKind::Image,
        }
    }

    pub fn education_certificate() -> Self {
        Self::new("education", "certificate", FileKind::Document)
    }

    pub fn achievement_icon(id: &str) -> Self {
        Self::new("achievements", "icon", FileKind::Image).for_item(id)
    }

    pub fn certification_file(id: &str) -> Self {
        Self::new("certifications", "cert", FileKind::Document).for_item(id)
    }

    pub fn certification_badge(id: &str) -> Self {
        Self::new("certifications", "badge", FileKind::Image).for_item(id)
    }

    pub fn blog_image(id: &str) -> Self {
        Self::new("blogs", "image", FileKind::Image).for_item(id)
    }

    pub fn testimonial_image(id: &str) -> Self {
        Self::new("testimonial", "image", FileKind::Image).for_item(id)
    }

    /// Path relative to the API base, without a leading slash
    pub fn path(&self) -> String {
        let mut path = format!("upload/{}", self.section);
        if let Some(kind) = &self.kind {
            path.push('/');
            path.push_str(kind);
        }
        if let Some(id) = &self.id {
            path.push('/');
            path.push_str(id);
        }
        path
    }
}

/// File picked for upload
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: &str, content_type: &str, bytes: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            content_type: content_type.to_string(),
            bytes,
        }
    }

    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .filter(|ext| !ext.is_empty())
    }

    /// Reject empty, oversized or wrongly typed files before any request is made
    pub fn check(&self, accepts: FileKind) -> ClientResult<()> {
        if self.bytes.is_empty() {
            return Err(ClientError::validation("file", "is empty"));
        }
        if self.bytes.len() > MAX_FILE_SIZE {
            return Err(ClientError::validation("file", "must be 10MB or smaller"));
        }

        let allowed = accepts.extensions();
        match self.extension() {
            Some(ext) if allowed.contains(&ext.as_str()) => Ok(()),
            _ => Err(ClientError::validation(
                "file",
                format!("must be one of: {}", allowed.join(", ")),
            )),
        }
    }
}

/// Server answer to an upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Uploaded {
    pub url: String,
}
