//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::identity::{Identity, NewIdentity};
use crate::domain::value_object::{email::Email, user_id::UserId, username::Username};
use crate::error::AuthResult;

/// Identity repository trait
///
/// Implementations must reject a write that would break username or email
/// uniqueness with `AuthError::Duplicate`, even when the uniqueness guard
/// already passed (concurrent registrations race past it).
#[trait_variant::make(IdentityRepository: Send)]
pub trait LocalIdentityRepository {
    /// Persist a new identity and return it with its assigned ID
    async fn insert(&self, identity: &NewIdentity) -> AuthResult<Identity>;

    /// Overwrite the mutable fields of an existing identity
    async fn update(&self, identity: &Identity) -> AuthResult<()>;

    /// Find identity by ID
    async fn find_by_id(&self, id: UserId) -> AuthResult<Option<Identity>>;

    /// Find identity by exact username
    async fn find_by_username(&self, username: &Username) -> AuthResult<Option<Identity>>;

    /// Find identity by normalized email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Identity>>;
}
