//! Local mirrors of server collections.
//!
//! A store is the single source of truth for what a section displays. It only
//! changes after the server confirmed a mutation; failures leave it as it was.

pub mod collection;
pub mod singleton;

pub use collection::ResourceStore;
pub use singleton::{SingletonResource, SingletonStore};

use crate::error::ClientError;

/// Load lifecycle shared by every store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(ClientError),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&ClientError> {
        match self {
            LoadState::Failed(error) => Some(error),
            _ => None,
        }
    }
}
