use async_trait::async_trait;
use reqwest::{multipart, Client, Method, RequestBuilder, Response, StatusCode};
use serde_json::{json, Value};

use crate::client::ResourceApi;
use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::models::{AuthResponse, LoginRequest, User};
use crate::resource::Collection;
use crate::session::Session;
use crate::upload::{UploadFile, UploadTarget, Uploaded, FILE_FIELD};

const LOGIN_FALLBACK: &str = "Login failed. Please check your credentials.";

/// REST client for the portfolio backend.
///
/// Every request carries the session's bearer token. A 401 answer clears the
/// stored credential; redirecting to a login screen is left to the caller.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    session: Session,
}

impl HttpClient {
    pub fn new(base_url: &str, session: Session, config: &Config) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ClientError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Client pointed at `config.api_base_url`
    pub fn from_config(config: &Config, session: Session) -> ClientResult<Self> {
        Self::new(&config.api_base_url, session, config)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exchange credentials for a token and cache the user in the session
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<User> {
        let credentials = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .client
            .post(self.url("auth/login"))
            .json(&credentials)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.json::<Value>().await.unwrap_or(Value::Null);
            let message = error_message(&body).unwrap_or_else(|| LOGIN_FALLBACK.to_string());
            return Err(ClientError::server(status, message));
        }

        let auth: AuthResponse = response.json().await?;
        self.session.set_token(&auth.token);
        self.session.set_user(&auth.user);
        tracing::info!("Logged in as {}", auth.user.email);

        Ok(auth.user)
    }

    pub fn logout(&self) {
        self.session.clear_auth();
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!("{} /{}", method, path);

        let mut request = self.client.request(method, self.url(path));
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        request
    }

    /// Send and classify the answer. `label` names the resource in `NotFound` errors.
    async fn send(&self, request: RequestBuilder, label: &str) -> ClientResult<Response> {
        let response = request.send().await.map_err(|e| {
            tracing::debug!("Request failed: {}", e);
            ClientError::Network(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("Received 401, clearing stored session");
            self.session.clear_auth();
        }

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(label.to_string()));
        }

        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        let message = error_message(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });
        Err(ClientError::server(status.as_u16(), message))
    }

    /// Send and decode a JSON body; an empty body decodes as `Null`
    async fn send_json(&self, request: RequestBuilder, label: &str) -> ClientResult<Value> {
        let response = self.send(request, label).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Pull a human message out of an error body: `message`, then `error`
fn error_message(body: &Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .filter_map(|key| body.get(key).and_then(Value::as_str))
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

fn into_list(value: Value, collection: Collection) -> ClientResult<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        Value::Null => Ok(Vec::new()),
        other => Err(ClientError::Decode(format!(
            "expected a list of {}, got {}",
            collection, other
        ))),
    }
}

#[async_trait]
impl ResourceApi for HttpClient {
    async fn list(&self, collection: Collection) -> ClientResult<Vec<Value>> {
        let request = self.request(Method::GET, &collection.list_path());
        let body = self.send_json(request, collection.label()).await?;
        into_list(body, collection)
    }

    async fn get(&self, collection: Collection, id: &str) -> ClientResult<Value> {
        let request = self.request(Method::GET, &collection.item_path(id));
        self.send_json(request, collection.label()).await
    }

    async fn create(&self, collection: Collection, fields: Value) -> ClientResult<Value> {
        let request = self.request(Method::POST, collection.as_str()).json(&fields);
        self.send_json(request, collection.label()).await
    }

    async fn update(&self, collection: Collection, id: &str, fields: Value) -> ClientResult<Value> {
        let request = self
            .request(Method::PUT, &collection.item_path(id))
            .json(&fields);
        self.send_json(request, collection.label()).await
    }

    async fn delete(&self, collection: Collection, id: &str) -> ClientResult<()> {
        let request = self.request(Method::DELETE, &collection.item_path(id));
        self.send(request, collection.label()).await?;
        Ok(())
    }

    async fn bulk_create(
        &self,
        collection: Collection,
        items: Vec<Value>,
    ) -> ClientResult<Vec<Value>> {
        let path = format!("{}/bulk", collection.as_str());
        let request = self.request(Method::POST, &path).json(&items);
        let body = self.send_json(request, collection.label()).await?;
        into_list(body, collection)
    }

    async fn get_singleton(&self, collection: Collection) -> ClientResult<Value> {
        let request = self.request(Method::GET, collection.as_str());
        self.send_json(request, collection.label()).await
    }

    async fn update_singleton(&self, collection: Collection, fields: Value) -> ClientResult<Value> {
        let request = self.request(Method::PUT, collection.as_str()).json(&fields);
        self.send_json(request, collection.label()).await
    }

    async fn upload(&self, target: &UploadTarget, file: UploadFile) -> ClientResult<Uploaded> {
        file.check(target.accepts)?;

        let part = multipart::Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str(&file.content_type)
            .map_err(|_| ClientError::validation("file", "has an invalid content type"))?;
        let form = multipart::Form::new().part(FILE_FIELD, part);

        let request = self.request(Method::POST, &target.path()).multipart(form);
        let body = self.send_json(request, "Upload").await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn mark_read(&self, id: &str) -> ClientResult<Value> {
        let path = format!("{}/read", Collection::Messages.item_path(id));
        let request = self
            .request(Method::PUT, &path)
            .json(&json!({ "read": true }));
        self.send_json(request, Collection::Messages.label()).await
    }

    async fn unread_count(&self) -> ClientResult<u64> {
        let request = self.request(Method::GET, "messages/unread");
        let body = self.send_json(request, Collection::Messages.label()).await?;
        Ok(into_list(body, Collection::Messages)?.len() as u64)
    }
}
