//! Current User Use Case
//!
//! Returns the authenticated identity with a newly signed token, sliding
//! the expiry window on every authenticated read.

use std::sync::Arc;

use crate::application::output::UserOutput;
use crate::application::token::TokenService;
use crate::domain::entity::identity::Identity;
use crate::error::AuthResult;

pub struct CurrentUserUseCase {
    tokens: Arc<dyn TokenService>,
}

impl CurrentUserUseCase {
    pub fn new(tokens: Arc<dyn TokenService>) -> Self {
        Self { tokens }
    }

    pub fn execute(&self, identity: &Identity) -> AuthResult<UserOutput> {
        UserOutput::issue(identity, self.tokens.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::authenticate::AuthenticateUseCase;
    use crate::application::test_support::{auth_header, register, setup};
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn test_current_user_reissues_token() {
        let (repo, tokens, config) = setup();
        let registered = register(&repo, &tokens, &config, "jake", "jake@jake.jake").await;

        let identity = AuthenticateUseCase::new(repo, tokens.clone())
            .execute(&auth_header(&registered.token))
            .await
            .unwrap()
            .identity;
        // Token issued 23 hours ago, still valid
        let old = tokens
            .issue_at(identity.id, "jake", Utc::now() - Duration::hours(23))
            .unwrap();

        let output = CurrentUserUseCase::new(tokens.clone())
            .execute(&identity)
            .unwrap();

        assert_ne!(output.token, old);
        assert_eq!(output.username, "jake");
        assert_eq!(output.email, "jake@jake.jake");

        let fresh = tokens.codec().decode(&output.token).unwrap();
        let stale = tokens.codec().decode(&old).unwrap();
        assert_eq!(fresh.user_id(), stale.user_id());
        assert!(fresh.expires_at() > stale.expires_at());
    }
}
