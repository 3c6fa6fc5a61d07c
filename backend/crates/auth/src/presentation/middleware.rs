//! Auth Middleware
//!
//! Middleware for requiring a valid token on protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::application::AuthenticateUseCase;
use crate::domain::repository::IdentityRepository;
use crate::error::AuthError;
use crate::presentation::handlers::AuthAppState;

/// Verify the bearer token and attach [`CurrentUser`](crate::application::CurrentUser)
/// to the request extensions
pub async fn require_auth<R>(
    State(state): State<AuthAppState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError>
where
    R: IdentityRepository + Clone + Send + Sync + 'static,
{
    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.tokens.clone());
    let current = use_case.execute(req.headers()).await?;

    tracing::debug!(user_id = %current.identity.id, "Request authenticated");

    req.extensions_mut().insert(current);
    Ok(next.run(req).await)
}
