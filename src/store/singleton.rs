use serde_json::Value;
use std::sync::Arc;

use crate::client::ResourceApi;
use crate::error::ClientResult;
use crate::models::{About, Contact, Profile, Resume};
use crate::resource::{decode, encode_draft, Resource};
use crate::schema;
use crate::store::LoadState;

/// One-per-owner section; an absent record reads as `Default`
pub trait SingletonResource: Resource + Default {}

impl SingletonResource for Profile {}
impl SingletonResource for About {}
impl SingletonResource for Contact {}
impl SingletonResource for Resume {}

/// Holds the single object of a singleton section
pub struct SingletonStore<T: SingletonResource> {
    api: Arc<dyn ResourceApi>,
    value: T,
    state: LoadState,
}

impl<T: SingletonResource> SingletonStore<T> {
    pub fn new(api: Arc<dyn ResourceApi>) -> Self {
        Self {
            api,
            value: T::default(),
            state: LoadState::Idle,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_loading()
    }

    pub async fn load(&mut self) -> ClientResult<()> {
        self.state = LoadState::Loading;

        let result = match self.api.get_singleton(T::COLLECTION).await {
            Ok(raw) => read::<T>(raw),
            Err(e) => Err(e),
        };

        match result {
            Ok(value) => {
                self.value = value;
                self.state = LoadState::Loaded;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", T::COLLECTION, e);
                self.state = LoadState::Failed(e.clone());
                Err(e)
            }
        }
    }

    /// Save the whole object; the server's copy replaces the held one
    pub async fn update(&mut self, value: &T) -> ClientResult<T> {
        let mut fields = encode_draft(value)?;
        schema::normalize(T::FIELDS, &mut fields);
        schema::validate(T::FIELDS, &fields)?;
        self.put(fields).await
    }

    /// Save only the given fields
    pub async fn update_fields(&mut self, mut fields: Value) -> ClientResult<T> {
        schema::normalize(T::FIELDS, &mut fields);
        schema::validate_partial(T::FIELDS, &fields)?;
        self.put(fields).await
    }

    async fn put(&mut self, fields: Value) -> ClientResult<T> {
        let saved: T = read(self.api.update_singleton(T::COLLECTION, fields).await?)?;
        self.value = saved.clone();
        Ok(saved)
    }
}

/// `null` and `{}` are the valid empty state
fn read<T: SingletonResource>(raw: Value) -> ClientResult<T> {
    match &raw {
        Value::Null => Ok(T::default()),
        Value::Object(object) if object.is_empty() => Ok(T::default()),
        _ => decode(raw),
    }
}
