//! Environment Configuration Helpers
//!
//! Small helpers for reading process configuration once at startup.

use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Required variable is unset or empty
    #[error("{0} must be set to a non-empty value")]
    Missing(String),

    /// Variable is set but cannot be parsed
    #[error("{name} has an invalid value: {reason}")]
    Invalid { name: String, reason: String },
}

/// Read a required, non-empty variable
pub fn require_env(name: &str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name.to_string())),
    }
}

/// Read an optional variable; empty counts as unset
pub fn optional_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Read and parse a variable, falling back to `default` when unset
pub fn parse_env_or<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = optional_env(name) else {
        return Ok(default);
    };
    raw.trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::Invalid {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable name; the process environment is shared.

    #[test]
    fn test_require_env_missing() {
        let name = "PLATFORM_TEST_SURELY_UNSET_VAR";
        assert_eq!(
            require_env(name),
            Err(ConfigError::Missing(name.to_string()))
        );
    }

    #[test]
    fn test_parse_env_or_default() {
        let value: u32 = parse_env_or("PLATFORM_TEST_UNSET_NUMBER", 5).unwrap();
        assert_eq!(value, 5);
    }

    #[test]
    fn test_optional_env_unset() {
        assert_eq!(optional_env("PLATFORM_TEST_UNSET_OPTIONAL"), None);
    }
}
