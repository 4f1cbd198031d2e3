pub mod http;
pub mod memory;

pub use http::HttpClient;
pub use memory::InMemoryBackend;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ClientResult;
use crate::resource::Collection;
use crate::upload::{UploadFile, UploadTarget, Uploaded};

/// Resource client trait for abstracting the backend
/// Resources travel as raw JSON; stores decode them into section types
#[async_trait]
pub trait ResourceApi: Send + Sync {
    /// List every item of a collection, in server order
    async fn list(&self, collection: Collection) -> ClientResult<Vec<Value>>;

    /// Get one item by id
    async fn get(&self, collection: Collection, id: &str) -> ClientResult<Value>;

    /// Create an item; the response carries the server-assigned id and timestamps
    async fn create(&self, collection: Collection, fields: Value) -> ClientResult<Value>;

    /// Apply a partial update and return the stored item
    async fn update(&self, collection: Collection, id: &str, fields: Value) -> ClientResult<Value>;

    /// Delete an item; a missing id is `NotFound`
    async fn delete(&self, collection: Collection, id: &str) -> ClientResult<()>;

    /// Create several items with one request
    async fn bulk_create(&self, collection: Collection, items: Vec<Value>)
        -> ClientResult<Vec<Value>>;

    /// Get a singleton resource; `Null` or `{}` when none exists yet
    async fn get_singleton(&self, collection: Collection) -> ClientResult<Value>;

    /// Replace a singleton resource
    async fn update_singleton(&self, collection: Collection, fields: Value) -> ClientResult<Value>;

    /// Upload a file and return its stable URL
    async fn upload(&self, target: &UploadTarget, file: UploadFile) -> ClientResult<Uploaded>;

    /// Mark one message as read and return it
    async fn mark_read(&self, id: &str) -> ClientResult<Value>;

    /// Number of messages with `read = false`
    async fn unread_count(&self) -> ClientResult<u64>;
}
