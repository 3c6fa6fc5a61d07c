//! Domain Layer
//!
//! Contains entities, value objects, token claims and repository traits.

pub mod claims;
pub mod entity;
pub mod messages;
pub mod repository;
pub mod uniqueness;
pub mod value_object;

// Re-exports
pub use claims::Claims;
pub use entity::{Identity, IdentityChanges, NewIdentity};
pub use repository::IdentityRepository;
pub use uniqueness::IdentityUniquenessGuard;
