//! Application Configuration
//!
//! Configuration for the Auth application layer. Loaded once at startup and
//! shared read-only behind an `Arc`.

use chrono::Duration;
use platform::config::{ConfigError, optional_env, require_env};
use std::fmt;

use crate::domain::claims::{ISSUER, TOKEN_TTL};

/// Environment variable holding the token signing secret
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";

/// Environment variable holding the optional password pepper
pub const PASSWORD_PEPPER_ENV: &str = "PASSWORD_PEPPER";

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC secret for token signing (never empty)
    jwt_secret: Vec<u8>,
    /// Lifetime of an issued token (24 hours)
    pub token_ttl: Duration,
    /// `iss` claim written and required on every token
    pub issuer: String,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    /// Config with the given signing secret and default token settings
    ///
    /// An empty secret is refused: signing with it would make every token forgeable.
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Result<Self, ConfigError> {
        let jwt_secret = jwt_secret.into();
        if jwt_secret.is_empty() {
            return Err(ConfigError::Missing(JWT_SECRET_ENV.to_string()));
        }
        Ok(Self {
            jwt_secret,
            token_ttl: TOKEN_TTL,
            issuer: ISSUER.to_string(),
            password_pepper: None,
        })
    }

    /// Load from `JWT_SECRET` and `PASSWORD_PEPPER`
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = require_env(JWT_SECRET_ENV)?;
        let mut config = Self::new(secret.into_bytes())?;
        config.password_pepper = optional_env(PASSWORD_PEPPER_ENV).map(String::into_bytes);
        Ok(config)
    }

    pub fn with_pepper(mut self, pepper: impl Into<Vec<u8>>) -> Self {
        self.password_pepper = Some(pepper.into());
        self
    }

    pub fn jwt_secret(&self) -> &[u8] {
        &self.jwt_secret
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("issuer", &self.issuer)
            .field(
                "password_pepper",
                &self.password_pepper.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
