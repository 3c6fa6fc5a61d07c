//! Field Validation Errors
//!
//! A generic accumulator mapping a field key to an ordered list of
//! human-readable messages. An empty accumulator means validation passed.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Field key → messages, in insertion order per key
///
/// Keys are kept sorted so rendered error bodies are stable.
///
/// ## Examples
/// ```rust
/// use kernel::validation::FieldErrors;
///
/// let mut errors = FieldErrors::new();
/// errors.add("username", "has already been taken");
/// errors.add("email", "has already been taken");
/// assert!(!errors.is_empty());
/// assert_eq!(errors.get("username"), Some(&["has already been taken".to_string()][..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for a single failing field
    pub fn single(key: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(key, message);
        errors
    }

    /// Append a message to `key`
    pub fn add(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.0.entry(key.into()).or_default().push(message.into());
    }

    /// Append `message` to `key` unless `ok` holds
    pub fn require(&mut self, ok: bool, key: impl Into<String>, message: impl Into<String>) {
        if !ok {
            self.add(key, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// `Ok(())` when empty, otherwise the accumulated errors
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{key} {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}
