//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Identity, value objects, token claims, repository trait, uniqueness guard
//! - `application/` - Token codec/service, credential verifier, use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Registration, login, current user and profile update
//! - Stateless HS256 tokens (`Authorization: Token <jwt>`), re-issued on every
//!   authenticated response
//! - Username/email uniqueness checked up front and enforced by the datastore
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (NIST SP 800-63B compliant)
//! - Token algorithm pinned to HS256; every decode failure renders as an opaque 401
//! - Unknown-email logins spend the same hashing work as wrong-password logins

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::{JwtTokenService, TokenService};
pub use error::{AuthError, AuthResult, DecodeError};
pub use infra::{InMemoryIdentityRepository, PgIdentityRepository};
pub use presentation::router::{auth_router, auth_router_with_tokens};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::claims::Claims;
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::infra::postgres::PgIdentityRepository as IdentityStore;
}
