//! Register Use Case
//!
//! Creates a new identity and signs the first token for it.

use kernel::validation::FieldErrors;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::credential::CredentialVerifier;
use crate::application::output::{UserOutput, fold_duplicate, parse_field};
use crate::application::token::TokenService;
use crate::domain::entity::identity::NewIdentity;
use crate::domain::repository::IdentityRepository;
use crate::domain::uniqueness::IdentityUniquenessGuard;
use crate::domain::value_object::{email::Email, user_password::RawPassword, username::Username};
use crate::error::{AuthError, AuthResult};

/// Register input
#[derive(Default)]
pub struct RegisterInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: IdentityRepository,
{
    repo: Arc<R>,
    guard: IdentityUniquenessGuard<R>,
    tokens: Arc<dyn TokenService>,
    verifier: CredentialVerifier,
}

impl<R> RegisterUseCase<R>
where
    R: IdentityRepository + Send + Sync,
{
    pub fn new(repo: Arc<R>, tokens: Arc<dyn TokenService>, config: Arc<AuthConfig>) -> Self {
        Self {
            guard: IdentityUniquenessGuard::new(repo.clone()),
            repo,
            tokens,
            verifier: CredentialVerifier::new(config.password_pepper.clone()),
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<UserOutput> {
        let mut errors = FieldErrors::new();

        let username = parse_field(&mut errors, "username", input.username, Username::new);
        let email = parse_field(&mut errors, "email", input.email, Email::new);
        let password = parse_field(&mut errors, "password", input.password, RawPassword::new);

        // Both conflicts are reported together
        self.guard
            .check_all(username.as_ref(), email.as_ref(), None, &mut errors)
            .await?;

        let (Some(username), Some(email), Some(password)) = (username, email, password) else {
            return Err(AuthError::Validation(errors));
        };
        errors.into_result()?;

        let password = self.verifier.hash(&password)?;
        let identity = self
            .repo
            .insert(&NewIdentity::new(username, email, password))
            .await
            .map_err(fold_duplicate)?;

        tracing::info!(user_id = %identity.id, "User registered");

        UserOutput::issue(&identity, self.tokens.as_ref())
    }
}
