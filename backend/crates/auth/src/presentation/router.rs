//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::{JwtTokenService, TokenService};
use crate::domain::repository::IdentityRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_auth;

/// Create the Auth router with the default JWT token service
pub fn auth_router<R>(repo: R, config: AuthConfig) -> Router
where
    R: IdentityRepository + Clone + Send + Sync + 'static,
{
    let config = Arc::new(config);
    let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(&config));
    auth_router_with_tokens(repo, config, tokens)
}

/// Create the Auth router with a caller-supplied token service
pub fn auth_router_with_tokens<R>(
    repo: R,
    config: Arc<AuthConfig>,
    tokens: Arc<dyn TokenService>,
) -> Router
where
    R: IdentityRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        tokens,
        config,
    };

    let protected = Router::new()
        .route("/user", get(handlers::current_user::<R>))
        .route("/user", put(handlers::update_user::<R>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth::<R>,
        ));

    Router::new()
        .route("/users", post(handlers::register::<R>))
        .route("/users/login", post(handlers::login::<R>))
        .merge(protected)
        .with_state(state)
}
