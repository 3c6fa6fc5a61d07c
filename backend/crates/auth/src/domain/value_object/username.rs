//! Username Value Object
//!
//! The public handle of an identity. Unique across all identities.
//!
//! ## Invariants
//! - NFKC normalized, surrounding whitespace trimmed
//! - 1 to 64 characters
//! - No whitespace or control characters inside

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

use crate::domain::messages::{EMPTY_MSG, INVALID_MSG};

/// Maximum length for a username (in characters)
pub const USERNAME_MAX_LENGTH: usize = 64;

/// Username validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsernameError {
    Empty,
    TooLong { length: usize, max: usize },
    /// Whitespace or control character inside the name
    InvalidCharacter { position: usize },
}

impl fmt::Display for UsernameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "{EMPTY_MSG}"),
            Self::TooLong { max, .. } => write!(f, "is too long (maximum is {max} characters)"),
            Self::InvalidCharacter { .. } => write!(f, "{INVALID_MSG}"),
        }
    }
}

impl std::error::Error for UsernameError {}

/// Validated username
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UsernameError> {
        let normalized: String = raw.as_ref().nfkc().collect();
        let trimmed = normalized.trim();

        if trimmed.is_empty() {
            return Err(UsernameError::Empty);
        }

        let length = trimmed.chars().count();
        if length > USERNAME_MAX_LENGTH {
            return Err(UsernameError::TooLong {
                length,
                max: USERNAME_MAX_LENGTH,
            });
        }

        if let Some(position) = trimmed
            .chars()
            .position(|c| c.is_whitespace() || c.is_control())
        {
            return Err(UsernameError::InvalidCharacter { position });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(username: impl Into<String>) -> Self {
        Self(username.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
