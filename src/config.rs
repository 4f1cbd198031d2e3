use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone)]
pub struct Config {
    // Client
    pub api_base_url: String,
    pub request_timeout_seconds: u64,
    pub session_file: Option<PathBuf>,

    // Development backend
    pub admin_email: String,
    pub admin_password: String,
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,

    // Server
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Client-only configuration: the backend secrets are not required
    pub fn client_from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if exists

        Ok(Self {
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            request_timeout_seconds: parse_var("REQUEST_TIMEOUT_SECONDS", 30)?,
            session_file: env::var("SESSION_FILE").ok().map(PathBuf::from),
            ..Self::default()
        })
    }

    /// Full configuration for the development backend: client settings plus admin, JWT and bind address
    pub fn from_env() -> Result<Self, ConfigError> {
        let client = Self::client_from_env()?;

        Ok(Self {
            // Development backend
            admin_email: env::var("ADMIN_EMAIL").unwrap_or_else(|_| client.admin_email.clone()),
            admin_password: required_var("ADMIN_PASSWORD")?,
            jwt_secret: required_var("JWT_SECRET")?,
            jwt_expiration_hours: parse_var("JWT_EXPIRATION_HOURS", client.jwt_expiration_hours)?,

            // Server
            host: env::var("HOST").unwrap_or_else(|_| client.host.clone()),
            port: parse_var("PORT", client.port)?,
            ..client
        })
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_seconds: 30,
            session_file: None,
            admin_email: "admin@portfolio.local".to_string(),
            admin_password: String::new(),
            jwt_secret: String::new(),
            jwt_expiration_hours: 24,
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing(name))
}

/// Parse `name` when set, otherwise fall back to `default`
fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(name)),
        Err(_) => Ok(default),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid environment variable: {0}")]
    Invalid(&'static str),
}
