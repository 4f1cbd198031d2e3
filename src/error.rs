use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Error raised by the resource client and everything built on top of it
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    // Transport errors (no usable response)
    #[error("Network error: {0}")]
    Network(String),

    // Server answered with a 4xx/5xx
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    #[error("{0} not found")]
    NotFound(String),

    // Client-side, never sent to the server
    #[error("Validation error: {0}")]
    Validation(String),

    // 2xx body that does not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        ClientError::Server {
            status,
            message: message.into(),
        }
    }

    pub fn unauthorized() -> Self {
        ClientError::server(401, "Unauthorized")
    }

    pub fn validation(field: &str, reason: impl AsRef<str>) -> Self {
        ClientError::Validation(format!("{}: {}", field, reason.as_ref()))
    }

    /// HTTP status the error corresponds to, if it came from (or maps to) a response
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } => Some(*status),
            ClientError::NotFound(_) => Some(404),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

// The development backend answers with the same taxonomy the client decodes
impl IntoResponse for ClientError {
    fn into_response(self) -> Response {
        let (status, error_message, details) = match &self {
            // 404 Not Found
            ClientError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                format!("{} not found", resource),
                Some(resource.clone()),
            ),

            // 400 Bad Request
            ClientError::Validation(msg) | ClientError::Decode(msg) => (
                StatusCode::BAD_REQUEST,
                "Validation error".to_string(),
                Some(msg.clone()),
            ),

            ClientError::Server { status, message } => {
                let code =
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                if code.is_server_error() {
                    tracing::error!("Server error: {}", message);
                }
                (code, message.clone(), None)
            }

            ClientError::Network(msg) => {
                tracing::error!("Upstream error: {}", msg);
                (StatusCode::BAD_GATEWAY, "Upstream unavailable".to_string(), None)
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
            details,
        });

        (status, body).into_response()
    }
}

// Convenient conversions from common error types

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return ClientError::Decode(err.to_string());
        }
        match err.status() {
            Some(status) => ClientError::server(status.as_u16(), err.to_string()),
            None => ClientError::Network(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

impl From<argon2::password_hash::Error> for ClientError {
    fn from(err: argon2::password_hash::Error) -> Self {
        ClientError::server(500, format!("Password hashing failed: {}", err))
    }
}

impl From<jsonwebtoken::errors::Error> for ClientError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                ClientError::server(401, "Token expired")
            }
            _ => ClientError::server(401, "Invalid token"),
        }
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
