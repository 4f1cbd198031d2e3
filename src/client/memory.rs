use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::client::ResourceApi;
use crate::error::{ClientError, ClientResult};
use crate::resource::{raw_id, Collection, ID_FIELD};
use crate::upload::{UploadFile, UploadTarget, Uploaded};

/// In-memory backend with the server's semantics, for tests and the mock server
#[derive(Clone)]
pub struct InMemoryBackend {
    inner: Arc<Mutex<InMemoryBackendInner>>,
}

struct InMemoryBackendInner {
    collections: HashMap<Collection, Vec<Value>>,
    singletons: HashMap<Collection, Value>,
    upload_base: String,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::with_upload_base("http://localhost:5000")
    }

    /// Uploaded files are reported under `{upload_base}/uploads/...`
    pub fn with_upload_base(upload_base: &str) -> Self {
        Self {
            inner: Arc::new(Mutex::new(InMemoryBackendInner {
                collections: HashMap::new(),
                singletons: HashMap::new(),
                upload_base: upload_base.trim_end_matches('/').to_string(),
            })),
        }
    }

    /// Insert a record as-is (it must already carry an id); returns the stored value
    pub async fn seed(&self, collection: Collection, record: Value) -> ClientResult<Value> {
        let mut inner = self.inner.lock().await;
        if collection.is_singleton() {
            inner.singletons.insert(collection, record.clone());
            return Ok(record);
        }

        let record = match raw_id(&record) {
            Some(_) => record,
            None => stamp_new(collection, record)?,
        };
        inner
            .collections
            .entry(collection)
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    pub async fn unread_messages(&self) -> Vec<Value> {
        let inner = self.inner.lock().await;
        inner
            .collections
            .get(&Collection::Messages)
            .map(|messages| {
                messages
                    .iter()
                    .filter(|m| !m.get("read").and_then(Value::as_bool).unwrap_or(false))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn now() -> Value {
    let stamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default();
    Value::String(stamp)
}

fn into_object(fields: Value, collection: Collection) -> ClientResult<Map<String, Value>> {
    match fields {
        Value::Object(object) => Ok(object),
        _ => Err(ClientError::Validation(format!(
            "{} payload must be a JSON object",
            collection.label()
        ))),
    }
}

/// Strip fields the server owns from an incoming payload
fn without_server_fields(mut object: Map<String, Value>) -> Map<String, Value> {
    object.remove(ID_FIELD);
    object.remove("id");
    object.remove("createdAt");
    object.remove("updatedAt");
    object
}

/// Assign id and timestamps to a new record
fn stamp_new(collection: Collection, fields: Value) -> ClientResult<Value> {
    let mut object = without_server_fields(into_object(fields, collection)?);
    if collection == Collection::Messages {
        object.entry("read").or_insert(Value::Bool(false));
    }

    let stamp = now();
    object.insert(ID_FIELD.to_string(), Value::String(Uuid::new_v4().to_string()));
    object.insert("createdAt".to_string(), stamp.clone());
    object.insert("updatedAt".to_string(), stamp);
    Ok(Value::Object(object))
}

/// Merge a partial payload into an existing record
fn merge_into(record: &mut Value, collection: Collection, fields: Value) -> ClientResult<()> {
    let changes = without_server_fields(into_object(fields, collection)?);
    if let Some(object) = record.as_object_mut() {
        object.extend(changes);
        object.insert("updatedAt".to_string(), now());
    }
    Ok(())
}

impl InMemoryBackendInner {
    fn items(&self, collection: Collection) -> &[Value] {
        self.collections
            .get(&collection)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn find_mut(&mut self, collection: Collection, id: &str) -> ClientResult<&mut Value> {
        self.collections
            .get_mut(&collection)
            .and_then(|items| items.iter_mut().find(|item| raw_id(item) == Some(id)))
            .ok_or_else(|| ClientError::NotFound(collection.label().to_string()))
    }
}

#[async_trait]
impl ResourceApi for InMemoryBackend {
    async fn list(&self, collection: Collection) -> ClientResult<Vec<Value>> {
        let inner = self.inner.lock().await;
        Ok(inner.items(collection).to_vec())
    }

    async fn get(&self, collection: Collection, id: &str) -> ClientResult<Value> {
        let inner = self.inner.lock().await;
        inner
            .items(collection)
            .iter()
            .find(|item| raw_id(item) == Some(id))
            .cloned()
            .ok_or_else(|| ClientError::NotFound(collection.label().to_string()))
    }

    async fn create(&self, collection: Collection, fields: Value) -> ClientResult<Value> {
        let record = stamp_new(collection, fields)?;
        let mut inner = self.inner.lock().await;
        inner
            .collections
            .entry(collection)
            .or_default()
            .push(record.clone());

        tracing::debug!("Created {} {}", collection, raw_id(&record).unwrap_or_default());
        Ok(record)
    }

    async fn update(&self, collection: Collection, id: &str, fields: Value) -> ClientResult<Value> {
        let mut inner = self.inner.lock().await;
        let record = inner.find_mut(collection, id)?;
        merge_into(record, collection, fields)?;
        Ok(record.clone())
    }

    async fn delete(&self, collection: Collection, id: &str) -> ClientResult<()> {
        let mut inner = self.inner.lock().await;
        let items = inner.collections.entry(collection).or_default();
        let before = items.len();
        items.retain(|item| raw_id(item) != Some(id));

        if items.len() == before {
            return Err(ClientError::NotFound(collection.label().to_string()));
        }
        Ok(())
    }

    async fn bulk_create(
        &self,
        collection: Collection,
        items: Vec<Value>,
    ) -> ClientResult<Vec<Value>> {
        // Stamp everything first so a bad item leaves the collection untouched
        let records = items
            .into_iter()
            .map(|fields| stamp_new(collection, fields))
            .collect::<ClientResult<Vec<_>>>()?;

        let mut inner = self.inner.lock().await;
        inner
            .collections
            .entry(collection)
            .or_default()
            .extend(records.iter().cloned());
        Ok(records)
    }

    async fn get_singleton(&self, collection: Collection) -> ClientResult<Value> {
        let inner = self.inner.lock().await;
        Ok(inner
            .singletons
            .get(&collection)
            .cloned()
            .unwrap_or_else(|| json!({})))
    }

    async fn update_singleton(&self, collection: Collection, fields: Value) -> ClientResult<Value> {
        let mut inner = self.inner.lock().await;
        let record = inner
            .singletons
            .entry(collection)
            .or_insert_with(|| {
                let stamp = now();
                json!({
                    ID_FIELD: Uuid::new_v4().to_string(),
                    "createdAt": stamp.clone(),
                    "updatedAt": stamp,
                })
            });
        merge_into(record, collection, fields)?;
        Ok(record.clone())
    }

    async fn upload(&self, target: &UploadTarget, file: UploadFile) -> ClientResult<Uploaded> {
        file.check(target.accepts)?;

        let inner = self.inner.lock().await;
        let url = format!(
            "{}/uploads/{}/{}-{}",
            inner.upload_base,
            target.path().trim_start_matches("upload/"),
            Uuid::new_v4(),
            file.name
        );
        Ok(Uploaded { url })
    }

    async fn mark_read(&self, id: &str) -> ClientResult<Value> {
        self.update(Collection::Messages, id, json!({ "read": true }))
            .await
    }

    async fn unread_count(&self) -> ClientResult<u64> {
        Ok(self.unread_messages().await.len() as u64)
    }
}
