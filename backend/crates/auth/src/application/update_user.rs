//! Update User Use Case
//!
//! Changes the profile fields of the authenticated identity.
//! Only username, email, bio and image can change; a submitted password is ignored.

use kernel::validation::FieldErrors;
use std::sync::Arc;

use crate::application::output::{UserOutput, fold_duplicate, parse_field};
use crate::application::token::TokenService;
use crate::domain::entity::identity::{Identity, IdentityChanges};
use crate::domain::repository::IdentityRepository;
use crate::domain::uniqueness::IdentityUniquenessGuard;
use crate::domain::value_object::{email::Email, username::Username};
use crate::error::AuthResult;

/// Update input. `None` leaves a field unchanged.
#[derive(Default)]
pub struct UpdateUserInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
}

/// Update user use case
pub struct UpdateUserUseCase<R>
where
    R: IdentityRepository,
{
    repo: Arc<R>,
    guard: IdentityUniquenessGuard<R>,
    tokens: Arc<dyn TokenService>,
}

impl<R> UpdateUserUseCase<R>
where
    R: IdentityRepository + Send + Sync,
{
    pub fn new(repo: Arc<R>, tokens: Arc<dyn TokenService>) -> Self {
        Self {
            guard: IdentityUniquenessGuard::new(repo.clone()),
            repo,
            tokens,
        }
    }

    pub async fn execute(
        &self,
        current: Identity,
        input: UpdateUserInput,
    ) -> AuthResult<UserOutput> {
        let mut errors = FieldErrors::new();

        let username = match input.username {
            Some(raw) => parse_field(&mut errors, "username", Some(raw), Username::new),
            None => None,
        };
        let email = match input.email {
            Some(raw) => parse_field(&mut errors, "email", Some(raw), Email::new),
            None => None,
        };

        self.guard
            .check_all(
                username.as_ref(),
                email.as_ref(),
                Some(current.id),
                &mut errors,
            )
            .await?;
        errors.into_result()?;

        if input.password.is_some() {
            tracing::debug!(user_id = %current.id, "Password ignored on profile update");
        }

        let mut identity = current;
        identity.apply(IdentityChanges {
            username,
            email,
            bio: input.bio,
            image: input.image,
        });

        self.repo.update(&identity).await.map_err(fold_duplicate)?;

        tracing::info!(user_id = %identity.id, "User updated");

        UserOutput::issue(&identity, self.tokens.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::authenticate::AuthenticateUseCase;
    use crate::application::test_support::{BlindLookupRepository, auth_header, register, setup};
    use crate::domain::messages::TAKEN_MSG;
    use crate::error::AuthError;
    use crate::infra::memory::InMemoryIdentityRepository;

    async fn load(
        repo: &Arc<InMemoryIdentityRepository>,
        tokens: &Arc<crate::application::token::JwtTokenService>,
        token: &str,
    ) -> Identity {
        AuthenticateUseCase::new(repo.clone(), tokens.clone())
            .execute(&auth_header(token))
            .await
            .unwrap()
            .identity
    }

    #[tokio::test]
    async fn test_update_bio_with_own_username_and_email() {
        let (repo, tokens, config) = setup();
        let registered = register(&repo, &tokens, &config, "jake", "jake@jake.jake").await;
        let current = load(&repo, &tokens, &registered.token).await;

        let output = UpdateUserUseCase::new(repo.clone(), tokens.clone())
            .execute(
                current,
                UpdateUserInput {
                    username: Some("jake".into()),
                    email: Some("jake@jake.jake".into()),
                    bio: Some("I like to skateboard".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(output.username, "jake");
        assert_eq!(output.bio.as_deref(), Some("I like to skateboard"));

        let stored = repo
            .find_by_email(&Email::new("jake@jake.jake").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.bio.as_deref(), Some("I like to skateboard"));
    }

    #[tokio::test]
    async fn test_update_to_taken_values() {
        let (repo, tokens, config) = setup();
        register(&repo, &tokens, &config, "celeb", "celeb@jake.jake").await;
        let registered = register(&repo, &tokens, &config, "jake", "jake@jake.jake").await;
        let current = load(&repo, &tokens, &registered.token).await;

        let err = UpdateUserUseCase::new(repo, tokens)
            .execute(
                current,
                UpdateUserInput {
                    username: Some("celeb".into()),
                    email: Some("celeb@jake.jake".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        let AuthError::Validation(errors) = err else {
            panic!("expected validation error, got {err:?}");
        };
        assert_eq!(errors.get("username"), Some(&[TAKEN_MSG.to_string()][..]));
        assert_eq!(errors.get("email"), Some(&[TAKEN_MSG.to_string()][..]));
    }

    #[tokio::test]
    async fn test_update_duplicate_rejected_by_storage() {
        let (repo, tokens, config) = setup();
        register(&repo, &tokens, &config, "celeb", "celeb@jake.jake").await;
        let registered = register(&repo, &tokens, &config, "jake", "jake@jake.jake").await;
        let current = load(&repo, &tokens, &registered.token).await;

        let blind = Arc::new(BlindLookupRepository(repo.clone()));
        let err = UpdateUserUseCase::new(blind, tokens)
            .execute(
                current,
                UpdateUserInput {
                    email: Some("celeb@jake.jake".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), http::StatusCode::UNPROCESSABLE_ENTITY);
        let AuthError::Validation(errors) = err else {
            panic!("expected validation error, got {err:?}");
        };
        assert_eq!(errors.get("email"), Some(&[TAKEN_MSG.to_string()][..]));

        let stored = repo
            .find_by_username(&Username::new("jake").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.email.as_str(), "jake@jake.jake");
    }

    #[tokio::test]
    async fn test_update_ignores_password() {
        let (repo, tokens, config) = setup();
        let registered = register(&repo, &tokens, &config, "jake", "jake@jake.jake").await;
        let current = load(&repo, &tokens, &registered.token).await;
        let old_hash = current.password.clone();

        UpdateUserUseCase::new(repo.clone(), tokens)
            .execute(
                current,
                UpdateUserInput {
                    password: Some("newpassword".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let stored = repo
            .find_by_email(&Email::new("jake@jake.jake").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.password, old_hash);
    }

    #[tokio::test]
    async fn test_update_invalid_email() {
        let (repo, tokens, config) = setup();
        let registered = register(&repo, &tokens, &config, "jake", "jake@jake.jake").await;
        let current = load(&repo, &tokens, &registered.token).await;

        let err = UpdateUserUseCase::new(repo, tokens)
            .execute(
                current,
                UpdateUserInput {
                    email: Some("".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), http::StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_update_storage_failure_is_internal() {
        let (repo, tokens, config) = setup();
        let registered = register(&repo, &tokens, &config, "jake", "jake@jake.jake").await;
        let current = load(&repo, &tokens, &registered.token).await;
        repo.fail_writes(true);

        let err = UpdateUserUseCase::new(repo, tokens)
            .execute(
                current,
                UpdateUserInput {
                    bio: Some("bio".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
