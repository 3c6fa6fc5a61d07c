//! In-Memory Repository Implementation
//!
//! Process-local datastore with the same uniqueness guarantees as the
//! PostgreSQL schema. Used by tests and local tooling.

use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::entity::identity::{Identity, NewIdentity};
use crate::domain::repository::IdentityRepository;
use crate::domain::value_object::{email::Email, user_id::UserId, username::Username};
use crate::error::{AuthError, AuthResult, IdentityField};

#[derive(Default)]
struct Store {
    next_id: i64,
    identities: HashMap<UserId, Identity>,
}

/// In-memory identity repository
#[derive(Clone, Default)]
pub struct InMemoryIdentityRepository {
    store: Arc<Mutex<Store>>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryIdentityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent insert/update fail like an unreachable database
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.lock().map(|store| store.identities.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> AuthResult<MutexGuard<'_, Store>> {
        self.store
            .lock()
            .map_err(|_| AuthError::Internal("store lock poisoned".into()))
    }

    fn check_writable(&self) -> AuthResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AuthError::Internal("store unavailable".into()));
        }
        Ok(())
    }
}

impl Store {
    /// Reject values held by anyone other than `owner`
    fn check_unique(
        &self,
        username: &Username,
        email: &Email,
        owner: Option<UserId>,
    ) -> AuthResult<()> {
        for other in self.identities.values() {
            if Some(other.id) == owner {
                continue;
            }
            if other.username == *username {
                return Err(AuthError::Duplicate(IdentityField::Username));
            }
            if other.email == *email {
                return Err(AuthError::Duplicate(IdentityField::Email));
            }
        }
        Ok(())
    }
}

impl IdentityRepository for InMemoryIdentityRepository {
    async fn insert(&self, identity: &NewIdentity) -> AuthResult<Identity> {
        self.check_writable()?;
        let mut store = self.lock()?;
        store.check_unique(&identity.username, &identity.email, None)?;

        store.next_id += 1;
        let id = UserId::new(store.next_id);
        let identity = identity.clone().into_identity(id, Utc::now());
        store.identities.insert(id, identity.clone());

        Ok(identity)
    }

    async fn update(&self, identity: &Identity) -> AuthResult<()> {
        self.check_writable()?;
        let mut store = self.lock()?;
        store.check_unique(&identity.username, &identity.email, Some(identity.id))?;

        match store.identities.get_mut(&identity.id) {
            Some(slot) => {
                *slot = identity.clone();
                Ok(())
            }
            None => Err(AuthError::Internal(format!(
                "identity {} disappeared during update",
                identity.id
            ))),
        }
    }

    async fn find_by_id(&self, id: UserId) -> AuthResult<Option<Identity>> {
        Ok(self.lock()?.identities.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> AuthResult<Option<Identity>> {
        Ok(self
            .lock()?
            .identities
            .values()
            .find(|identity| identity.username == *username)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Identity>> {
        Ok(self
            .lock()?
            .identities
            .values()
            .find(|identity| identity.email == *email)
            .cloned())
    }
}
