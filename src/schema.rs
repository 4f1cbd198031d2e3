//! Per-section field schemas.
//!
//! Each section declares a static table of [`FieldSpec`]s. Drafts are checked
//! against that table before they reach the network, so a malformed email or
//! URL is reported as [`ClientError::Validation`] and never sent.

use serde_json::Value;

use crate::error::{ClientError, ClientResult};
use crate::validators;

/// Semantic type of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    Url,
    Email,
    Phone,
    /// One of a fixed set of lowercase values; see [`normalize`]
    Enum(&'static [&'static str]),
    Boolean,
    /// Array of strings
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }

    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }
}

/// Lowercase and trim enum values in place.
///
/// Run before [`validate`] so `"Published"` is sent, stored and read back as `"published"`.
pub fn normalize(specs: &[FieldSpec], draft: &mut Value) {
    let Some(object) = draft.as_object_mut() else {
        return;
    };

    for spec in specs {
        if !matches!(spec.kind, FieldKind::Enum(_)) {
            continue;
        }
        if let Some(Value::String(text)) = object.get_mut(spec.name) {
            *text = text.trim().to_lowercase();
        }
    }
}

/// Validate a JSON draft against a schema, returning the first failing field.
///
/// Unknown fields pass through untouched. A `null` or missing optional field is fine.
pub fn validate(specs: &[FieldSpec], draft: &Value) -> ClientResult<()> {
    check(specs, draft, false)
}

/// Like [`validate`], but absent fields are allowed: used for partial updates.
pub fn validate_partial(specs: &[FieldSpec], draft: &Value) -> ClientResult<()> {
    check(specs, draft, true)
}

fn check(specs: &[FieldSpec], draft: &Value, partial: bool) -> ClientResult<()> {
    let Some(object) = draft.as_object() else {
        return Err(ClientError::Validation(
            "payload must be a JSON object".to_string(),
        ));
    };

    for spec in specs {
        match object.get(spec.name) {
            None if partial => {}
            None | Some(Value::Null) => {
                if spec.required {
                    return Err(ClientError::validation(spec.name, "is required"));
                }
            }
            Some(value) => validate_value(spec, value)?,
        }
    }

    Ok(())
}

fn validate_value(spec: &FieldSpec, value: &Value) -> ClientResult<()> {
    match spec.kind {
        FieldKind::Boolean => {
            if !value.is_boolean() {
                return Err(ClientError::validation(spec.name, "must be true or false"));
            }
        }
        FieldKind::List => {
            let items = value
                .as_array()
                .ok_or_else(|| ClientError::validation(spec.name, "must be a list"))?;
            if !items.iter().all(Value::is_string) {
                return Err(ClientError::validation(spec.name, "must contain only text"));
            }
            if spec.required && items.is_empty() {
                return Err(ClientError::validation(spec.name, "is required"));
            }
        }
        _ => {
            let text = value
                .as_str()
                .ok_or_else(|| ClientError::validation(spec.name, "must be text"))?;
            validate_text(spec, text)?;
        }
    }
    Ok(())
}

fn validate_text(spec: &FieldSpec, text: &str) -> ClientResult<()> {
    if !validators::is_present(text) {
        if spec.required {
            return Err(ClientError::validation(spec.name, "is required"));
        }
        return Ok(());
    }

    match spec.kind {
        FieldKind::Url if !validators::is_valid_url(text) => {
            Err(ClientError::validation(spec.name, "Please enter a valid URL"))
        }
        FieldKind::Email if !validators::is_valid_email(text) => {
            Err(ClientError::validation(spec.name, "Please enter a valid email"))
        }
        FieldKind::Phone if !validators::is_valid_phone(text) => Err(ClientError::validation(
            spec.name,
            "Please enter a valid phone number",
        )),
        FieldKind::Enum(allowed) if !allowed.contains(&text) => {
            Err(ClientError::validation(
                spec.name,
                format!("must be one of: {}", allowed.join(", ")),
            ))
        }
        _ => Ok(()),
    }
}
