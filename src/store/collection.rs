use serde_json::Value;
use std::sync::Arc;

use crate::client::ResourceApi;
use crate::error::{ClientError, ClientResult};
use crate::models::Project;
use crate::resource::{decode, decode_persisted, encode_draft, Resource};
use crate::schema;
use crate::store::LoadState;

/// Client-side mirror of one collection, kept in server order
pub struct ResourceStore<T: Resource> {
    api: Arc<dyn ResourceApi>,
    items: Vec<T>,
    state: LoadState,
}

impl<T: Resource> ResourceStore<T> {
    pub fn new(api: Arc<dyn ResourceApi>) -> Self {
        Self {
            api,
            items: Vec::new(),
            state: LoadState::Idle,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Owned copy for views that filter or sort
    pub fn snapshot(&self) -> Vec<T> {
        self.items.clone()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == Some(id))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_loading()
    }

    /// Replace the local items with the server's list.
    ///
    /// On failure the store moves to `Failed` but keeps what it had.
    pub async fn load(&mut self) -> ClientResult<()> {
        self.state = LoadState::Loading;

        match self.fetch().await {
            Ok(items) => {
                tracing::debug!("Loaded {} {}", items.len(), T::COLLECTION);
                self.items = items;
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

    pub async fn refresh(&mut self) -> ClientResult<()> {
        self.load().await
    }

    async fn fetch(&self) -> ClientResult<Vec<T>> {
        let raw = self.api.list(T::COLLECTION).await?;

        let mut items: Vec<T> = Vec::with_capacity(raw.len());
        for value in raw {
            let item: T = match decode(value) {
                Ok(item) => item,
                Err(e) => {
                    tracing::warn!("Skipping undecodable {} item: {}", T::COLLECTION, e);
                    continue;
                }
            };
            let Some(id) = item.id().map(str::to_string) else {
                tracing::warn!("Skipping {} item without an id", T::COLLECTION);
                continue;
            };
            if items.iter().any(|existing| existing.id() == Some(id.as_str())) {
                tracing::warn!("Skipping duplicate {} id {}", T::COLLECTION, id);
                continue;
            }
            items.push(item);
        }
        Ok(items)
    }

    /// Validate and create a draft, then append the server's copy
    pub async fn create(&mut self, draft: &T) -> ClientResult<T> {
        let mut fields = encode_draft(draft)?;
        schema::normalize(T::FIELDS, &mut fields);
        schema::validate(T::FIELDS, &fields)?;

        let created: T = decode_persisted(self.api.create(T::COLLECTION, fields).await?)?;
        self.merge(created.clone());
        Ok(created)
    }

    /// Apply a partial update; the server's copy replaces the local entry
    pub async fn update(&mut self, id: &str, mut fields: Value) -> ClientResult<T> {
        schema::normalize(T::FIELDS, &mut fields);
        schema::validate_partial(T::FIELDS, &fields)?;

        let updated: T = decode_persisted(self.api.update(T::COLLECTION, id, fields).await?)?;
        self.merge(updated.clone());
        Ok(updated)
    }

    /// Create a draft without an id, otherwise update the whole item
    pub async fn save(&mut self, item: &T) -> ClientResult<T> {
        match item.id() {
            Some(id) => {
                let id = id.to_string();
                let mut fields = encode_draft(item)?;
                schema::normalize(T::FIELDS, &mut fields);
                schema::validate(T::FIELDS, &fields)?;
                self.update(&id, fields).await
            }
            None => self.create(item).await,
        }
    }

    /// Delete on the server first; the local entry goes only after success
    pub async fn delete(&mut self, id: &str) -> ClientResult<()> {
        self.api.delete(T::COLLECTION, id).await?;
        self.items.retain(|item| item.id() != Some(id));
        Ok(())
    }

    /// Validate every draft, create them in one request and append the results.
    ///
    /// Nothing is appended unless every returned item decodes.
    pub async fn bulk_create(&mut self, drafts: &[T]) -> ClientResult<Vec<T>> {
        let mut payload = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let mut fields = encode_draft(draft)?;
            schema::normalize(T::FIELDS, &mut fields);
            schema::validate(T::FIELDS, &fields)?;
            payload.push(fields);
        }

        let created = self
            .api
            .bulk_create(T::COLLECTION, payload)
            .await?
            .into_iter()
            .map(decode_persisted)
            .collect::<ClientResult<Vec<T>>>()?;

        tracing::info!("Created {} {} in bulk", created.len(), T::COLLECTION);
        for item in &created {
            self.merge(item.clone());
        }
        Ok(created)
    }

    pub(crate) fn api(&self) -> &Arc<dyn ResourceApi> {
        &self.api
    }

    /// Replace the entry with the same id in place, or append it
    pub(crate) fn merge(&mut self, item: T) {
        let position = item
            .id()
            .and_then(|id| self.items.iter().position(|existing| existing.id() == Some(id)));

        match position {
            Some(index) => self.items[index] = item,
            None => self.items.push(item),
        }
    }
}

impl ResourceStore<Project> {
    /// Flip a project between draft and published
    pub async fn toggle_publish(&mut self, id: &str) -> ClientResult<Project> {
        let status = self
            .get(id)
            .map(|project| project.status.toggled())
            .ok_or_else(|| ClientError::NotFound(Project::COLLECTION.label().to_string()))?;

        self.update(id, serde_json::json!({ "status": status.as_str() }))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::InMemoryBackend;
    use crate::models::{ProjectStatus, Skill, SocialLink};
    use crate::resource::Collection;
    use serde_json::json;

    fn store<T: Resource>(backend: &InMemoryBackend) -> ResourceStore<T> {
        ResourceStore::new(Arc::new(backend.clone()))
    }

    #[tokio::test]
    async fn test_load_skips_duplicates_and_missing_ids() {
        let backend = InMemoryBackend::new();
        backend
            .seed(Collection::Skills, json!({ "_id": "1", "name": "Rust" }))
            .await
            .unwrap();
        backend
            .seed(Collection::Skills, json!({ "_id": "1", "name": "Rust again" }))
            .await
            .unwrap();

        let mut skills = store::<Skill>(&backend);
        assert_eq!(skills.state(), &LoadState::Idle);

        skills.load().await.unwrap();
        assert_eq!(skills.state(), &LoadState::Loaded);
        assert_eq!(skills.len(), 1);
        assert_eq!(skills.get("1").unwrap().name, "Rust");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_draft_before_request() {
        let backend = InMemoryBackend::new();
        let mut social = store::<SocialLink>(&backend);

        let draft = SocialLink {
            platform: "github".to_string(),
            url: "not a url".to_string(),
            ..SocialLink::default()
        };
        let err = social.create(&draft).await.unwrap_err();

        assert!(matches!(err, ClientError::Validation(_)));
        assert!(social.is_empty());
        assert!(backend.list(Collection::Social).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_creates_then_updates() {
        let backend = InMemoryBackend::new();
        let mut projects = store::<Project>(&backend);

        let mut project = projects
            .save(&Project {
                title: "Portfolio".to_string(),
                ..Project::default()
            })
            .await
            .unwrap();
        assert!(project.id.is_some());
        assert_eq!(project.status, ProjectStatus::Draft);

        project.status = ProjectStatus::Published;
        let saved = projects.save(&project).await.unwrap();

        assert_eq!(projects.len(), 1);
        assert_eq!(saved.status, ProjectStatus::Published);
        assert_eq!(projects.items()[0].status, ProjectStatus::Published);
    }

    #[tokio::test]
    async fn test_load_skips_undecodable_item() {
        let backend = InMemoryBackend::new();
        for raw in [
            json!({ "_id": "1", "id": "1", "title": "Both ids" }),
            json!({ "_id": "2", "title": 42 }),
            json!({ "_id": "3", "title": "Fine" }),
        ] {
            backend.seed(Collection::Projects, raw).await.unwrap();
        }

        let mut projects = store::<Project>(&backend);
        projects.load().await.unwrap();

        let ids: Vec<_> = projects.items().iter().filter_map(|p| p.id.as_deref()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[tokio::test]
    async fn test_update_lowercases_enum() {
        let backend = InMemoryBackend::new();
        backend
            .seed(Collection::Projects, json!({ "_id": "1", "title": "Site" }))
            .await
            .unwrap();
        let mut projects = store::<Project>(&backend);
        projects.load().await.unwrap();

        let updated = projects
            .update("1", json!({ "status": "Published" }))
            .await
            .unwrap();
        assert_eq!(updated.status, ProjectStatus::Published);

        let stored = backend.get(Collection::Projects, "1").await.unwrap();
        assert_eq!(stored["status"], json!("published"));

        projects.load().await.unwrap();
        assert_eq!(projects.len(), 1);
    }

    #[tokio::test]
    async fn test_update_rejects_bad_enum() {
        let backend = InMemoryBackend::new();
        let mut projects = store::<Project>(&backend);
        let err = projects
            .update("any", json!({ "status": "archived" }))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[tokio::test]
    async fn test_bulk_create_appends_all() {
        let backend = InMemoryBackend::new();
        let mut skills = store::<Skill>(&backend);
        skills
            .create(&Skill::draft("Rust", "Languages", "Advanced"))
            .await
            .unwrap();

        let created = skills
            .bulk_create(&[
                Skill::draft("Go", "Languages", "Intermediate"),
                Skill::draft("SQL", "Database", "Advanced"),
            ])
            .await
            .unwrap();

        assert_eq!(created.len(), 2);
        assert_eq!(skills.len(), 3);
        assert_eq!(skills.items()[2].name, "SQL");
    }

    #[tokio::test]
    async fn test_bulk_create_validates_every_draft() {
        let backend = InMemoryBackend::new();
        let mut skills = store::<Skill>(&backend);

        let err = skills
            .bulk_create(&[Skill::draft("Go", "", ""), Skill::draft("", "", "")])
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Validation(_)));
        assert!(backend.list(Collection::Skills).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_publish() {
        let backend = InMemoryBackend::new();
        let mut projects = store::<Project>(&backend);
        let project = projects
            .create(&Project {
                title: "Site".to_string(),
                ..Project::default()
            })
            .await
            .unwrap();
        let id = project.id.unwrap();

        let toggled = projects.toggle_publish(&id).await.unwrap();
        assert_eq!(toggled.status, ProjectStatus::Published);
        let toggled = projects.toggle_publish(&id).await.unwrap();
        assert_eq!(toggled.status, ProjectStatus::Draft);

        assert!(projects.toggle_publish("missing").await.is_err());
    }
}
