//! Shared use case plumbing: the user-with-token output and field parsing

use kernel::validation::FieldErrors;
use std::fmt::Display;

use crate::application::token::TokenService;
use crate::domain::entity::identity::Identity;
use crate::domain::messages::TAKEN_MSG;
use crate::error::{AuthError, AuthResult};

/// Identity shaped for a response, with a freshly issued token
#[derive(Debug, Clone)]
pub struct UserOutput {
    pub username: String,
    pub email: String,
    pub token: String,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl UserOutput {
    pub(crate) fn issue(identity: &Identity, tokens: &dyn TokenService) -> AuthResult<Self> {
        let token = tokens.issue(identity.id, identity.username.as_str())?;
        Ok(Self {
            username: identity.username.as_str().to_owned(),
            email: identity.email.as_str().to_owned(),
            token,
            bio: identity.bio.clone(),
            image: identity.image.clone(),
        })
    }
}

/// Parse one submitted field, recording its failure under `key`
///
/// A missing field parses as the empty string.
pub(crate) fn parse_field<T, E>(
    errors: &mut FieldErrors,
    key: &str,
    value: Option<String>,
    parse: impl FnOnce(String) -> Result<T, E>,
) -> Option<T>
where
    E: Display,
{
    match parse(value.unwrap_or_default()) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            errors.add(key, e.to_string());
            None
        }
    }
}

/// Storage-level uniqueness conflict, reported like the pre-check
pub(crate) fn fold_duplicate(err: AuthError) -> AuthError {
    match err {
        AuthError::Duplicate(field) => {
            AuthError::Validation(FieldErrors::single(field.to_string(), TAKEN_MSG))
        }
        other => other,
    }
}
