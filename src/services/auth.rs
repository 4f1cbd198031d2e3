//! Single-admin login for the development backend.
//!
//! The admin comes from config. Its password is hashed once at startup and
//! every token is an HS256 JWT whose subject is the admin's id.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::models::{AuthResponse, LoginRequest, User};

#[derive(Debug, Serialize, Deserialize)]
struct AdminClaims {
    sub: String,
    role: String,
    iat: i64,
    exp: i64,
}

pub struct AdminAuth {
    admin: User,
    password_hash: String,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl: Duration,
}

impl AdminAuth {
    pub fn from_config(config: &Config) -> ClientResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(config.admin_password.as_bytes(), &salt)?
            .to_string();

        Ok(Self {
            admin: User {
                id: Some(Uuid::new_v4().to_string()),
                email: config.admin_email.clone(),
                name: "Admin".to_string(),
                role: "admin".to_string(),
            },
            password_hash,
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            token_ttl: Duration::hours(config.jwt_expiration_hours),
        })
    }

    pub fn admin(&self) -> &User {
        &self.admin
    }

    /// Exchange the admin's credentials for a token
    pub fn login(&self, request: &LoginRequest) -> ClientResult<AuthResponse> {
        let email_matches = request.email.trim().eq_ignore_ascii_case(&self.admin.email);
        if !email_matches || !self.password_matches(&request.password) {
            tracing::warn!("Rejected login for {}", request.email);
            return Err(ClientError::server(401, "Invalid credentials"));
        }

        Ok(AuthResponse {
            token: self.issue_token()?,
            user: self.admin.clone(),
        })
    }

    pub fn issue_token(&self) -> ClientResult<String> {
        let now = OffsetDateTime::now_utc();
        let claims = AdminClaims {
            sub: self.admin_id().to_string(),
            role: self.admin.role.clone(),
            iat: now.unix_timestamp(),
            exp: (now + self.token_ttl).unix_timestamp(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ClientError::server(500, format!("Token generation failed: {}", e)))
    }

    /// The admin a bearer token was issued to; anything else is a 401
    pub fn authorize(&self, token: &str) -> ClientResult<&User> {
        let data =
            jsonwebtoken::decode::<AdminClaims>(token, &self.decoding_key, &Validation::default())?;

        if data.claims.sub != self.admin_id() {
            return Err(ClientError::unauthorized());
        }
        Ok(&self.admin)
    }

    fn admin_id(&self) -> &str {
        self.admin.id.as_deref().unwrap_or_default()
    }

    fn password_matches(&self, password: &str) -> bool {
        PasswordHash::new(&self.password_hash).is_ok_and(|hash| {
            Argon2::default()
                .verify_password(password.as_bytes(), &hash)
                .is_ok()
        })
    }
}
