use serde_json::{json, Value};

use portfolio_cms::client::InMemoryBackend;
use portfolio_cms::resource::Collection;
use portfolio_cms::state::AppState;

/// Authentication info for tests
pub struct TestAuth {
    pub admin_id: String,
    pub token: String,
}

impl TestAuth {
    /// Get the Authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Factory for creating test data
pub struct Factory<'a> {
    state: &'a AppState,
    backend: &'a InMemoryBackend,
}

impl<'a> Factory<'a> {
    pub fn new(state: &'a AppState, backend: &'a InMemoryBackend) -> Self {
        Self { state, backend }
    }

    /// Token for the configured admin
    pub fn admin(&self) -> TestAuth {
        TestAuth {
            admin_id: self.state.auth.admin().id.clone().unwrap(),
            token: self.state.auth.issue_token().unwrap(),
        }
    }

    pub async fn create_skill(&self, name: &str) -> Value {
        self.backend
            .seed(
                Collection::Skills,
                json!({ "name": name, "category": "Languages", "level": "Advanced" }),
            )
            .await
            .unwrap()
    }

    pub async fn create_project(&self, title: &str, status: &str) -> Value {
        self.backend
            .seed(
                Collection::Projects,
                json!({ "title": title, "status": status, "techStack": ["Rust"] }),
            )
            .await
            .unwrap()
    }

    pub async fn create_message(&self, name: &str, read: bool) -> Value {
        self.backend
            .seed(
                Collection::Messages,
                json!({
                    "name": name,
                    "email": format!("{}@example.com", name.to_lowercase()),
                    "message": format!("Hello from {}", name),
                    "read": read,
                }),
            )
            .await
            .unwrap()
    }
}
