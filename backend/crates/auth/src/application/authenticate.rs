//! Authenticate Use Case
//!
//! Resolves request headers to the identity the token was issued for.

use http::HeaderMap;
use std::sync::Arc;

use crate::application::token::TokenService;
use crate::domain::claims::Claims;
use crate::domain::entity::identity::Identity;
use crate::domain::repository::IdentityRepository;
use crate::error::{AuthError, AuthResult};

/// Identity behind a verified token, stored in request extensions
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub identity: Identity,
    pub claims: Claims,
}

/// Authenticate use case
pub struct AuthenticateUseCase<R>
where
    R: IdentityRepository,
{
    repo: Arc<R>,
    tokens: Arc<dyn TokenService>,
}

impl<R> AuthenticateUseCase<R>
where
    R: IdentityRepository + Send + Sync,
{
    pub fn new(repo: Arc<R>, tokens: Arc<dyn TokenService>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(&self, headers: &HeaderMap) -> AuthResult<CurrentUser> {
        let claims = self.tokens.verify_request(headers)?;

        let identity = self
            .repo
            .find_by_id(claims.user_id())
            .await?
            .ok_or(AuthError::UnknownSubject)?;

        Ok(CurrentUser { identity, claims })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{auth_header, register, setup};
    use crate::domain::value_object::user_id::UserId;
    use crate::error::DecodeError;

    #[tokio::test]
    async fn test_authenticate_resolves_identity() {
        let (repo, tokens, config) = setup();
        let output = register(&repo, &tokens, &config, "jake", "jake@jake.jake").await;
        let use_case = AuthenticateUseCase::new(repo, tokens);

        let headers = auth_header(&output.token);
        let current = use_case.execute(&headers).await.unwrap();
        assert_eq!(current.identity.username.as_str(), "jake");
        assert_eq!(current.claims.user_id(), current.identity.id);
    }

    #[tokio::test]
    async fn test_authenticate_unknown_subject() {
        let (repo, tokens, _) = setup();
        let token = tokens.issue(UserId::new(404), "ghost").unwrap();
        let use_case = AuthenticateUseCase::new(repo, tokens);

        let err = use_case.execute(&auth_header(&token)).await.unwrap_err();
        assert!(matches!(err, AuthError::UnknownSubject));
    }

    #[tokio::test]
    async fn test_authenticate_missing_header() {
        let (repo, tokens, _) = setup();
        let use_case = AuthenticateUseCase::new(repo, tokens);

        let err = use_case.execute(&HeaderMap::new()).await.unwrap_err();
        assert!(matches!(err, AuthError::MissingHeader));
    }

    #[tokio::test]
    async fn test_authenticate_tampered_token() {
        let (repo, tokens, config) = setup();
        let output = register(&repo, &tokens, &config, "jake", "jake@jake.jake").await;
        let use_case = AuthenticateUseCase::new(repo, tokens);

        let mut token = output.token;
        let last = token.pop().unwrap();
        token.push(if last == 'A' { 'B' } else { 'A' });

        let err = use_case.execute(&auth_header(&token)).await.unwrap_err();
        assert!(matches!(
            err,
            AuthError::Unauthorized(DecodeError::SignatureInvalid)
        ));
    }
}
