//! Persisted client state: bearer token, cached user and theme preference.
//!
//! Plain key/value slots, not versioned and not migrated. Storage failures are
//! logged and otherwise ignored, so a broken session file degrades to
//! "logged out" instead of failing requests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::models::User;

pub const TOKEN_KEY: &str = "portfolio_token";
pub const USER_KEY: &str = "portfolio_user";
pub const THEME_KEY: &str = "portfolio_theme";

/// Key/value storage backend for the session
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);

    fn remove(&self, key: &str);
}

/// Process-local session, lost on exit
#[derive(Default)]
pub struct MemorySession {
    slots: RwLock<HashMap<String, String>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        let slots = self.slots.read().unwrap_or_else(|e| e.into_inner());
        slots.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut slots = self.slots.write().unwrap_or_else(|e| e.into_inner());
        slots.insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        let mut slots = self.slots.write().unwrap_or_else(|e| e.into_inner());
        slots.remove(key);
    }
}

/// Session persisted as a flat JSON object, rewritten on every change
pub struct FileSession {
    path: PathBuf,
    slots: RwLock<HashMap<String, String>>,
}

impl FileSession {
    /// Open the session file, starting empty if it is missing or unreadable
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let slots = match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                tracing::warn!("Discarding unreadable session file {}: {}", path.display(), e);
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };

        Self {
            path,
            slots: RwLock::new(slots),
        }
    }

    fn persist(&self, slots: &HashMap<String, String>) {
        let result = serde_json::to_string_pretty(slots)
            .map_err(std::io::Error::other)
            .and_then(|text| std::fs::write(&self.path, text));

        if let Err(e) = result {
            tracing::warn!("Failed to write session file {}: {}", self.path.display(), e);
        }
    }
}

impl SessionStore for FileSession {
    fn get(&self, key: &str) -> Option<String> {
        let slots = self.slots.read().unwrap_or_else(|e| e.into_inner());
        slots.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut slots = self.slots.write().unwrap_or_else(|e| e.into_inner());
        slots.insert(key.to_string(), value.to_string());
        self.persist(&slots);
    }

    fn remove(&self, key: &str) {
        let mut slots = self.slots.write().unwrap_or_else(|e| e.into_inner());
        if slots.remove(key).is_some() {
            self.persist(&slots);
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Typed view over a [`SessionStore`]; cheap to clone and share
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySession::new()))
    }

    pub fn token(&self) -> Option<String> {
        self.store
            .get(TOKEN_KEY)
            .filter(|t| !t.is_empty() && t != "undefined" && t != "null")
    }

    pub fn set_token(&self, token: &str) {
        self.store.set(TOKEN_KEY, token);
    }

    /// Cached user; a corrupt entry is dropped
    pub fn user(&self) -> Option<User> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Dropping unreadable cached user: {}", e);
                self.store.remove(USER_KEY);
                None
            }
        }
    }

    pub fn set_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(raw) => self.store.set(USER_KEY, &raw),
            Err(e) => tracing::warn!("Failed to cache user: {}", e),
        }
    }

    /// Remove the credential and cached user; the theme is kept
    pub fn clear_auth(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some() && self.user().is_some()
    }

    pub fn theme(&self) -> Theme {
        match self.store.get(THEME_KEY).as_deref() {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        self.store.set(THEME_KEY, theme.as_str());
    }

    pub fn toggle_theme(&self) -> Theme {
        let theme = self.theme().toggled();
        self.set_theme(theme);
        theme
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::in_memory()
    }
}
