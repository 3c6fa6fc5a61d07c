//! Authorization Header Utilities
//!
//! Extraction of credentials from the `Authorization` request header.

use http::{HeaderMap, header};
use thiserror::Error;

/// Scheme prefix clients send in front of the token
pub const TOKEN_SCHEME_PREFIX: &str = "Token ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthorizationError {
    /// Header absent or empty
    #[error("Authorization header missing")]
    Missing,
    /// Header present but not visible ASCII
    #[error("Authorization header is not visible ASCII")]
    Unreadable,
}

/// Read the raw `Authorization` header value
pub fn authorization(headers: &HeaderMap) -> Result<&str, AuthorizationError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthorizationError::Missing)?;
    let value = value.to_str().map_err(|_| AuthorizationError::Unreadable)?;

    if value.is_empty() {
        return Err(AuthorizationError::Missing);
    }
    Ok(value)
}

/// Extract the token from an `Authorization: Token <token>` header
///
/// The `Token ` prefix is stripped when present. A value without the
/// prefix is returned as-is so lenient clients still get their token
/// checked.
pub fn extract_token(headers: &HeaderMap) -> Result<&str, AuthorizationError> {
    let value = authorization(headers)?;
    Ok(value.strip_prefix(TOKEN_SCHEME_PREFIX).unwrap_or(value))
}
