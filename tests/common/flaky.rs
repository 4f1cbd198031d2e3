use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use portfolio_cms::client::{InMemoryBackend, ResourceApi};
use portfolio_cms::error::{ClientError, ClientResult};
use portfolio_cms::resource::Collection;
use portfolio_cms::upload::{UploadFile, UploadTarget, Uploaded};

/// In-memory backend whose named operations fail with a network error
pub struct FlakyBackend {
    pub inner: InMemoryBackend,
    failing: Mutex<HashSet<&'static str>>,
    // mark_read fails only for these ids when non-empty
    failing_ids: Mutex<HashSet<String>>,
}

impl FlakyBackend {
    pub fn new(inner: InMemoryBackend) -> Self {
        Self {
            inner,
            failing: Mutex::new(HashSet::new()),
            failing_ids: Mutex::new(HashSet::new()),
        }
    }

    pub fn fail(&self, operation: &'static str) {
        self.failing.lock().unwrap().insert(operation);
    }

    pub fn heal(&self) {
        self.failing.lock().unwrap().clear();
        self.failing_ids.lock().unwrap().clear();
    }

    pub fn fail_mark_read_for(&self, id: &str) {
        self.failing_ids.lock().unwrap().insert(id.to_string());
    }

    fn check(&self, operation: &'static str) -> ClientResult<()> {
        if self.failing.lock().unwrap().contains(operation) {
            return Err(ClientError::Network("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ResourceApi for FlakyBackend {
    async fn list(&self, collection: Collection) -> ClientResult<Vec<Value>> {
        self.check("list")?;
        self.inner.list(collection).await
    }

    async fn get(&self, collection: Collection, id: &str) -> ClientResult<Value> {
        self.check("get")?;
        self.inner.get(collection, id).await
    }

    async fn create(&self, collection: Collection, fields: Value) -> ClientResult<Value> {
        self.check("create")?;
        self.inner.create(collection, fields).await
    }

    async fn update(&self, collection: Collection, id: &str, fields: Value) -> ClientResult<Value> {
        self.check("update")?;
        self.inner.update(collection, id, fields).await
    }

    async fn delete(&self, collection: Collection, id: &str) -> ClientResult<()> {
        self.check("delete")?;
        self.inner.delete(collection, id).await
    }

    async fn bulk_create(
        &self,
        collection: Collection,
        items: Vec<Value>,
    ) -> ClientResult<Vec<Value>> {
        self.check("bulk_create")?;
        self.inner.bulk_create(collection, items).await
    }

    async fn get_singleton(&self, collection: Collection) -> ClientResult<Value> {
        self.check("get_singleton")?;
        self.inner.get_singleton(collection).await
    }

    async fn update_singleton(&self, collection: Collection, fields: Value) -> ClientResult<Value> {
        self.check("update_singleton")?;
        self.inner.update_singleton(collection, fields).await
    }

    async fn upload(&self, target: &UploadTarget, file: UploadFile) -> ClientResult<Uploaded> {
        self.check("upload")?;
        self.inner.upload(target, file).await
    }

    async fn mark_read(&self, id: &str) -> ClientResult<Value> {
        self.check("mark_read")?;
        if self.failing_ids.lock().unwrap().contains(id) {
            return Err(ClientError::server(500, "Failed to update message"));
        }
        self.inner.mark_read(id).await
    }

    async fn unread_count(&self) -> ClientResult<u64> {
        self.check("unread_count")?;
        self.inner.unread_count().await
    }
}
