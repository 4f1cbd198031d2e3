use std::sync::Arc;

use crate::client::{InMemoryBackend, ResourceApi};
use crate::config::Config;
use crate::error::ClientResult;
use crate::services::AdminAuth;

/// State shared by the development backend's handlers
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn ResourceApi>,
    pub config: Config,
    pub auth: Arc<AdminAuth>,
}

impl AppState {
    /// Fresh in-memory backend with the admin from `config`
    pub fn new(config: Config) -> ClientResult<Self> {
        let upload_base = format!("http://{}", config.server_addr());
        Self::with_backend(config, Arc::new(InMemoryBackend::with_upload_base(&upload_base)))
    }

    /// State over a custom backend (for testing)
    pub fn with_backend(config: Config, backend: Arc<dyn ResourceApi>) -> ClientResult<Self> {
        let auth = AdminAuth::from_config(&config)?;

        Ok(Self {
            backend,
            config,
            auth: Arc::new(auth),
        })
    }
}
