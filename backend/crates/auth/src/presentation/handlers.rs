//! HTTP Handlers

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use kernel::error::app_error::AppError;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::application::{
    CurrentUser, CurrentUserUseCase, LoginUseCase, RegisterUseCase, UpdateUserUseCase,
};
use crate::domain::repository::IdentityRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{LoginUser, RegisterUser, UpdateUser, UserEnvelope, UserResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: IdentityRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<dyn TokenService>,
    pub config: Arc<AuthConfig>,
}

type UserJson = Json<UserEnvelope<UserResponse>>;

/// Decode a `{"user": ...}` body; malformed JSON is a 422 keyed `body`
fn parse_body<T>(body: &Bytes) -> AuthResult<T>
where
    T: DeserializeOwned,
{
    let envelope: UserEnvelope<T> = serde_json::from_slice(body).map_err(AppError::from)?;
    Ok(envelope.user)
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/users
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    body: Bytes,
) -> AuthResult<(StatusCode, UserJson)>
where
    R: IdentityRepository + Clone + Send + Sync + 'static,
{
    let req: RegisterUser = parse_body(&body)?;

    let use_case = RegisterUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );
    let output = use_case.execute(req.into()).await?;

    Ok((StatusCode::CREATED, Json(output.into())))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/users/login
pub async fn login<R>(State(state): State<AuthAppState<R>>, body: Bytes) -> AuthResult<UserJson>
where
    R: IdentityRepository + Clone + Send + Sync + 'static,
{
    let req: LoginUser = parse_body(&body)?;

    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );
    let output = use_case.execute(req.into()).await?;

    Ok(Json(output.into()))
}

// ============================================================================
// Current User
// ============================================================================

/// GET /api/user
pub async fn current_user<R>(
    State(state): State<AuthAppState<R>>,
    Extension(current): Extension<CurrentUser>,
) -> AuthResult<UserJson>
where
    R: IdentityRepository + Clone + Send + Sync + 'static,
{
    let use_case = CurrentUserUseCase::new(state.tokens.clone());
    let output = use_case.execute(&current.identity)?;

    Ok(Json(output.into()))
}

// ============================================================================
// Update User
// ============================================================================

/// PUT /api/user
pub async fn update_user<R>(
    State(state): State<AuthAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    body: Bytes,
) -> AuthResult<UserJson>
where
    R: IdentityRepository + Clone + Send + Sync + 'static,
{
    let req: UpdateUser = parse_body(&body)?;

    let use_case = UpdateUserUseCase::new(state.repo.clone(), state.tokens.clone());
    let output = use_case.execute(current.identity, req.into()).await?;

    Ok(Json(output.into()))
}
