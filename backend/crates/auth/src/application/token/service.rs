//! Token Service
//!
//! Issues tokens for an identity and resolves request headers back to claims.

use chrono::{DateTime, Duration, Utc};
use http::HeaderMap;
use platform::header::{AuthorizationError, extract_token};

use super::codec::ClaimsCodec;
use crate::application::config::AuthConfig;
use crate::domain::claims::Claims;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult, DecodeError};

/// Issue/verify capability
///
/// Handlers depend on this trait so tests can substitute a stub.
pub trait TokenService: Send + Sync {
    /// Sign a fresh token for the subject, expiring one TTL from now
    fn issue(&self, user_id: UserId, username: &str) -> AuthResult<String>;

    /// Decode the `Authorization: Token <jwt>` header
    ///
    /// `MissingHeader` when absent or empty. An unreadable header value or
    /// any decode failure becomes `Unauthorized` carrying the [`DecodeError`].
    fn verify_request(&self, headers: &HeaderMap) -> AuthResult<Claims>;
}

/// HS256 JWT implementation with an injected secret
#[derive(Clone)]
pub struct JwtTokenService {
    codec: ClaimsCodec,
    issuer: String,
    ttl: Duration,
}

impl JwtTokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            codec: ClaimsCodec::new(config.jwt_secret(), &config.issuer),
            issuer: config.issuer.clone(),
            ttl: config.token_ttl,
        }
    }

    /// Issue with an explicit clock
    pub fn issue_at(
        &self,
        user_id: UserId,
        username: &str,
        now: DateTime<Utc>,
    ) -> AuthResult<String> {
        let claims = Claims::issue(self.issuer.as_str(), user_id, username, now, self.ttl);
        self.codec.encode(&claims)
    }

    pub fn codec(&self) -> &ClaimsCodec {
        &self.codec
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user_id: UserId, username: &str) -> AuthResult<String> {
        self.issue_at(user_id, username, Utc::now())
    }

    fn verify_request(&self, headers: &HeaderMap) -> AuthResult<Claims> {
        let token = extract_token(headers).map_err(|e| match e {
            AuthorizationError::Missing => AuthError::MissingHeader,
            AuthorizationError::Unreadable => AuthError::Unauthorized(DecodeError::Malformed),
        })?;
        let claims = self.codec.decode(token)?;
        Ok(claims)
    }
}
