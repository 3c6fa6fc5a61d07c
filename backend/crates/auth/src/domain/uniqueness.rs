//! Identity Uniqueness Guard
//!
//! Answers "may this username/email be assigned to this identity?".
//! A value is available when nobody holds it, or when the holder is the
//! identity being edited.

use kernel::validation::FieldErrors;
use std::sync::Arc;

use crate::domain::messages::TAKEN_MSG;
use crate::domain::repository::IdentityRepository;
use crate::domain::value_object::{email::Email, user_id::UserId, username::Username};
use crate::error::AuthResult;

pub struct IdentityUniquenessGuard<R>
where
    R: IdentityRepository,
{
    repo: Arc<R>,
}

impl<R> IdentityUniquenessGuard<R>
where
    R: IdentityRepository + Send + Sync,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// `current` is the identity being edited, `None` during registration
    pub async fn check_username(
        &self,
        username: &Username,
        current: Option<UserId>,
    ) -> AuthResult<bool> {
        let holder = self.repo.find_by_username(username).await?;
        Ok(is_unique(holder.map(|identity| identity.id), current))
    }

    pub async fn check_email(&self, email: &Email, current: Option<UserId>) -> AuthResult<bool> {
        let holder = self.repo.find_by_email(email).await?;
        Ok(is_unique(holder.map(|identity| identity.id), current))
    }

    /// Check both fields and record every conflict under its field key
    pub async fn check_all(
        &self,
        username: Option<&Username>,
        email: Option<&Email>,
        current: Option<UserId>,
        errors: &mut FieldErrors,
    ) -> AuthResult<()> {
        if let Some(username) = username {
            if !self.check_username(username, current).await? {
                errors.add("username", TAKEN_MSG);
            }
        }
        if let Some(email) = email {
            if !self.check_email(email, current).await? {
                errors.add("email", TAKEN_MSG);
            }
        }
        Ok(())
    }
}

fn is_unique(holder: Option<UserId>, current: Option<UserId>) -> bool {
    match holder {
        None => true,
        Some(holder) => current == Some(holder),
    }
}
