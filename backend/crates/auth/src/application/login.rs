//! Login Use Case
//!
//! Checks email + password and signs a token. Stages fail fast.

use kernel::validation::FieldErrors;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::credential::CredentialVerifier;
use crate::application::output::UserOutput;
use crate::application::token::TokenService;
use crate::domain::messages::{EMPTY_MSG, INVALID_CREDENTIALS_MSG};
use crate::domain::repository::IdentityRepository;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Login input
#[derive(Default)]
pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: IdentityRepository,
{
    repo: Arc<R>,
    tokens: Arc<dyn TokenService>,
    verifier: CredentialVerifier,
}

impl<R> LoginUseCase<R>
where
    R: IdentityRepository + Send + Sync,
{
    pub fn new(repo: Arc<R>, tokens: Arc<dyn TokenService>, config: Arc<AuthConfig>) -> Self {
        Self {
            repo,
            tokens,
            verifier: CredentialVerifier::new(config.password_pepper.clone()),
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<UserOutput> {
        let email = input.email.unwrap_or_default();
        let password = input.password.unwrap_or_default();

        let mut errors = FieldErrors::new();
        errors.require(!email.trim().is_empty(), "email", EMPTY_MSG);
        errors.require(!password.is_empty(), "password", EMPTY_MSG);
        errors.into_result()?;

        // A malformed email cannot match anyone; treat it like an unknown one.
        let identity = match Email::new(&email) {
            Ok(email) => self.repo.find_by_email(&email).await?,
            Err(_) => None,
        };

        let Some(identity) = identity else {
            self.verifier.burn(password);
            tracing::debug!("Login for unknown email");
            let errors = FieldErrors::single("email", INVALID_CREDENTIALS_MSG);
            return Err(errors.into());
        };

        if !self.verifier.matches(password, &identity.password) {
            tracing::info!(user_id = %identity.id, "Login with wrong password");
            let errors = FieldErrors::single("password", INVALID_CREDENTIALS_MSG);
            return Err(errors.into());
        }

        tracing::info!(user_id = %identity.id, "User logged in");

        UserOutput::issue(&identity, self.tokens.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{register, setup};
    use crate::error::AuthError;

    fn input(email: &str, password: &str) -> LoginInput {
        LoginInput {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    fn field_errors(err: AuthError) -> FieldErrors {
        match err {
            AuthError::Validation(errors) => errors,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_login_success() {
        let (repo, tokens, config) = setup();
        register(&repo, &tokens, &config, "jake", "jake@jake.jake").await;
        let use_case = LoginUseCase::new(repo, tokens.clone(), config);

        let output = use_case
            .execute(input("JAKE@jake.jake", "jakejake"))
            .await
            .unwrap();
        assert_eq!(output.username, "jake");
        assert_eq!(
            tokens.codec().decode(&output.token).unwrap().username(),
            "jake"
        );
    }

    #[tokio::test]
    async fn test_login_empty_fields() {
        let (repo, tokens, config) = setup();
        let use_case = LoginUseCase::new(repo, tokens, config);

        let errors = field_errors(use_case.execute(LoginInput::default()).await.unwrap_err());
        assert_eq!(errors.get("email"), Some(&[EMPTY_MSG.to_string()][..]));
        assert_eq!(errors.get("password"), Some(&[EMPTY_MSG.to_string()][..]));
    }

    #[tokio::test]
    async fn test_login_wrong_password_keyed_password() {
        let (repo, tokens, config) = setup();
        register(&repo, &tokens, &config, "jake", "jake@jake.jake").await;
        let use_case = LoginUseCase::new(repo, tokens, config);

        let errors = field_errors(
            use_case
                .execute(input("jake@jake.jake", "wrongpass"))
                .await
                .unwrap_err(),
        );
        assert_eq!(
            errors.get("password"),
            Some(&[INVALID_CREDENTIALS_MSG.to_string()][..])
        );
        assert!(!errors.has("email"));
    }

    #[tokio::test]
    async fn test_login_unknown_email_keyed_email() {
        let (repo, tokens, config) = setup();
        let use_case = LoginUseCase::new(repo, tokens, config);

        let errors = field_errors(
            use_case
                .execute(input("nobody@jake.jake", "jakejake"))
                .await
                .unwrap_err(),
        );
        assert_eq!(
            errors.get("email"),
            Some(&[INVALID_CREDENTIALS_MSG.to_string()][..])
        );
        assert!(!errors.has("password"));
    }

    #[tokio::test]
    async fn test_login_malformed_email_is_unknown() {
        let (repo, tokens, config) = setup();
        let use_case = LoginUseCase::new(repo, tokens, config);

        let errors = field_errors(
            use_case
                .execute(input("not-an-email", "jakejake"))
                .await
                .unwrap_err(),
        );
        assert!(errors.has("email"));
    }
}
