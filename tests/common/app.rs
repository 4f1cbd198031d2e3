use std::sync::Arc;

use axum_test::TestServer;
use portfolio_cms::build_router;
use portfolio_cms::client::{HttpClient, InMemoryBackend};
use portfolio_cms::config::Config;
use portfolio_cms::session::Session;
use portfolio_cms::state::AppState;

pub const ADMIN_EMAIL: &str = "owner@example.com";
pub const ADMIN_PASSWORD: &str = "Sup3r$ecret";

/// Test configuration
pub fn test_config() -> Config {
    Config {
        admin_email: ADMIN_EMAIL.to_string(),
        admin_password: ADMIN_PASSWORD.to_string(),
        jwt_secret: "test-jwt-secret-that-is-at-least-32-characters-long".to_string(),
        jwt_expiration_hours: 24,
        request_timeout_seconds: 5,
        port: 0,
        ..Config::default()
    }
}

/// Router-level test application
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    pub backend: InMemoryBackend,
}

impl TestApp {
    pub fn new() -> Self {
        let backend = InMemoryBackend::with_upload_base("http://test.local");
        let state = AppState::with_backend(test_config(), Arc::new(backend.clone()))
            .expect("Failed to create test app state");

        let router = build_router(state.clone());
        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            state,
            backend,
        }
    }
}

/// Development backend served on a real port, for exercising `HttpClient`
pub struct LiveServer {
    pub base_url: String,
    pub state: AppState,
    pub backend: InMemoryBackend,
}

impl LiveServer {
    pub async fn start() -> Self {
        let backend = InMemoryBackend::with_upload_base("http://test.local");
        let state = AppState::with_backend(test_config(), Arc::new(backend.clone()))
            .expect("Failed to create test app state");

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        let router = build_router(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Test server failed");
        });

        Self {
            base_url: format!("http://{}/api", addr),
            state,
            backend,
        }
    }

    /// Client with a fresh in-memory session
    pub fn client(&self) -> HttpClient {
        HttpClient::new(&self.base_url, Session::in_memory(), &test_config())
            .expect("Failed to create HTTP client")
    }

    /// Client already logged in as the admin
    pub async fn admin_client(&self) -> HttpClient {
        let client = self.client();
        client
            .login(ADMIN_EMAIL, ADMIN_PASSWORD)
            .await
            .expect("Admin login failed");
        client
    }
}
