//! Fixtures shared by use case tests

use http::{HeaderMap, HeaderValue, header::AUTHORIZATION};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::output::UserOutput;
use crate::application::register::{RegisterInput, RegisterUseCase};
use crate::application::token::JwtTokenService;
use crate::domain::entity::identity::{Identity, NewIdentity};
use crate::domain::repository::IdentityRepository;
use crate::domain::value_object::{email::Email, user_id::UserId, username::Username};
use crate::error::AuthResult;
use crate::infra::memory::InMemoryIdentityRepository;

pub(crate) fn setup() -> (
    Arc<InMemoryIdentityRepository>,
    Arc<JwtTokenService>,
    Arc<AuthConfig>,
) {
    let config = Arc::new(AuthConfig::new("test-secret").unwrap());
    let tokens = Arc::new(JwtTokenService::new(&config));
    (Arc::new(InMemoryIdentityRepository::new()), tokens, config)
}

pub(crate) fn register_input(username: &str, email: &str, password: &str) -> RegisterInput {
    RegisterInput {
        username: Some(username.to_string()),
        email: Some(email.to_string()),
        password: Some(password.to_string()),
    }
}

/// Register with the password `jakejake`
pub(crate) async fn register(
    repo: &Arc<InMemoryIdentityRepository>,
    tokens: &Arc<JwtTokenService>,
    config: &Arc<AuthConfig>,
    username: &str,
    email: &str,
) -> UserOutput {
    RegisterUseCase::new(repo.clone(), tokens.clone(), config.clone())
        .execute(register_input(username, email, "jakejake"))
        .await
        .unwrap()
}

pub(crate) fn auth_header(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Token {token}")).unwrap(),
    );
    headers
}

/// Store whose lookups never see existing rows, so only the write itself
/// can reject a duplicate. Models a registration racing past the guard.
pub(crate) struct BlindLookupRepository(pub Arc<InMemoryIdentityRepository>);

impl IdentityRepository for BlindLookupRepository {
    async fn insert(&self, identity: &NewIdentity) -> AuthResult<Identity> {
        self.0.insert(identity).await
    }

    async fn update(&self, identity: &Identity) -> AuthResult<()> {
        self.0.update(identity).await
    }

    async fn find_by_id(&self, id: UserId) -> AuthResult<Option<Identity>> {
        self.0.find_by_id(id).await
    }

    async fn find_by_username(&self, _username: &Username) -> AuthResult<Option<Identity>> {
        Ok(None)
    }

    async fn find_by_email(&self, _email: &Email) -> AuthResult<Option<Identity>> {
        Ok(None)
    }
}
