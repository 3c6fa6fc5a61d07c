//! Token Claims
//!
//! The payload carried inside a signed token. Constructed fresh per issuance,
//! never persisted, immutable once built.
//!
//! Wire names follow the token format clients already decode:
//! `iss`, `exp` (unix seconds), `UserID`, `Username`.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::value_object::user_id::UserId;

/// Fixed issuer of every token
pub const ISSUER: &str = "Conduit";

/// Lifetime of an issued token
pub const TOKEN_TTL: Duration = Duration::hours(24);

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    iss: String,
    exp: i64,
    #[serde(rename = "UserID")]
    user_id: UserId,
    #[serde(rename = "Username")]
    username: String,
}

impl Claims {
    /// Claims expiring exactly `ttl` after `issued_at`
    pub fn issue(
        issuer: impl Into<String>,
        user_id: UserId,
        username: impl Into<String>,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            iss: issuer.into(),
            exp: (issued_at + ttl).timestamp(),
            user_id,
            username: username.into(),
        }
    }

    pub fn issuer(&self) -> &str {
        &self.iss
    }

    /// Expiration as unix seconds
    pub fn expires_at(&self) -> i64 {
        self.exp
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Expired at or after the expiration instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

/// Username is redacted; IDs and timestamps are safe to log.
impl fmt::Debug for Claims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Claims")
            .field("iss", &self.iss)
            .field("exp", &self.exp)
            .field("user_id", &self.user_id)
            .field("username", &"[REDACTED]")
            .finish()
    }
}
