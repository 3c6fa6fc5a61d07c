//! Identity Entity
//!
//! A registered user. Username and email are unique across all identities;
//! the password is only ever held as a one-way hash.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, user_id::UserId, user_password::UserPassword, username::Username,
};

/// Identity not yet persisted. The datastore assigns the ID on insert.
#[derive(Debug, Clone)]
pub struct NewIdentity {
    pub username: Username,
    pub email: Email,
    pub password: UserPassword,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl NewIdentity {
    pub fn new(username: Username, email: Email, password: UserPassword) -> Self {
        Self {
            username,
            email,
            password,
            bio: None,
            image: None,
        }
    }

    /// Attach the datastore-assigned ID
    pub fn into_identity(self, id: UserId, created_at: DateTime<Utc>) -> Identity {
        Identity {
            id,
            username: self.username,
            email: self.email,
            password: self.password,
            bio: self.bio,
            image: self.image,
            created_at,
            updated_at: created_at,
        }
    }
}

/// Persisted identity
#[derive(Debug, Clone)]
pub struct Identity {
    /// Immutable once assigned
    pub id: UserId,
    pub username: Username,
    pub email: Email,
    pub password: UserPassword,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile fields a client may change. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct IdentityChanges {
    pub username: Option<Username>,
    pub email: Option<Email>,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl Identity {
    /// Apply the provided fields in place
    ///
    /// An empty bio or image clears it.
    pub fn apply(&mut self, changes: IdentityChanges) {
        if let Some(username) = changes.username {
            self.username = username;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(bio) = changes.bio {
            self.bio = non_blank(bio);
        }
        if let Some(image) = changes.image {
            self.image = non_blank(image);
        }
        self.updated_at = Utc::now();
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::RawPassword;

    fn identity() -> Identity {
        let raw = RawPassword::new("TestPassword123!".to_string()).unwrap();
        NewIdentity::new(
            Username::new("jake").unwrap(),
            Email::new("jake@jake.jake").unwrap(),
            UserPassword::from_raw(&raw, None).unwrap(),
        )
        .into_identity(UserId::new(1), Utc::now())
    }

    #[test]
    fn test_apply_only_provided_fields() {
        let mut identity = identity();
        identity.apply(IdentityChanges {
            bio: Some("I work at statefarm".to_string()),
            ..Default::default()
        });

        assert_eq!(identity.username.as_str(), "jake");
        assert_eq!(identity.email.as_str(), "jake@jake.jake");
        assert_eq!(identity.bio.as_deref(), Some("I work at statefarm"));
        assert_eq!(identity.image, None);
    }

    #[test]
    fn test_apply_blank_clears() {
        let mut identity = identity();
        identity.image = Some("https://example.com/a.png".to_string());
        identity.apply(IdentityChanges {
            image: Some("  ".to_string()),
            ..Default::default()
        });
        assert_eq!(identity.image, None);
    }

    #[test]
    fn test_id_survives_changes() {
        let mut identity = identity();
        identity.apply(IdentityChanges {
            username: Some(Username::new("jacob").unwrap()),
            ..Default::default()
        });
        assert_eq!(identity.id, UserId::new(1));
        assert_eq!(identity.username.as_str(), "jacob");
    }
}
