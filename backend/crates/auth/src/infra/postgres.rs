//! PostgreSQL Repository Implementation
//!
//! Username and email uniqueness is enforced by the `users_username_key` and
//! `users_email_key` constraints; violations surface as `AuthError::Duplicate`.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entity::identity::{Identity, NewIdentity};
use crate::domain::repository::IdentityRepository;
use crate::domain::value_object::{
    email::Email, user_id::UserId, user_password::UserPassword, username::Username,
};
use crate::error::{AuthError, AuthResult, IdentityField};

const USERNAME_CONSTRAINT: &str = "users_username_key";
const EMAIL_CONSTRAINT: &str = "users_email_key";

/// PostgreSQL-backed identity repository
#[derive(Clone)]
pub struct PgIdentityRepository {
    pool: PgPool,
}

impl PgIdentityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl IdentityRepository for PgIdentityRepository {
    async fn insert(&self, identity: &NewIdentity) -> AuthResult<Identity> {
        let (id, created_at): (i64, DateTime<Utc>) = sqlx::query_as(
            r#"
            INSERT INTO users (username, email, password_hash, bio, image)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, created_at
            "#,
        )
        .bind(identity.username.as_str())
        .bind(identity.email.as_str())
        .bind(identity.password.as_phc_string())
        .bind(identity.bio.as_deref())
        .bind(identity.image.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(identity.clone().into_identity(UserId::new(id), created_at))
    }

    async fn update(&self, identity: &Identity) -> AuthResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET username = $2,
                email = $3,
                bio = $4,
                image = $5,
                updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(identity.id.value())
        .bind(identity.username.as_str())
        .bind(identity.email.as_str())
        .bind(identity.bio.as_deref())
        .bind(identity.image.as_deref())
        .bind(identity.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(AuthError::Internal(format!(
                "identity {} disappeared during update",
                identity.id
            )));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> AuthResult<Option<Identity>> {
        let row = sqlx::query_as::<_, IdentityRow>(
            r#"
            SELECT id, username, email, password_hash, bio, image, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.map(IdentityRow::into_identity).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> AuthResult<Option<Identity>> {
        let row = sqlx::query_as::<_, IdentityRow>(
            r#"
            SELECT id, username, email, password_hash, bio, image, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(IdentityRow::into_identity).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Identity>> {
        let row = sqlx::query_as::<_, IdentityRow>(
            r#"
            SELECT id, username, email, password_hash, bio, image, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(IdentityRow::into_identity).transpose()
    }
}

/// Unique violations on a known constraint become `Duplicate`
fn map_write_error(err: sqlx::Error) -> AuthError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            match db.constraint() {
                Some(USERNAME_CONSTRAINT) => return AuthError::Duplicate(IdentityField::Username),
                Some(EMAIL_CONSTRAINT) => return AuthError::Duplicate(IdentityField::Email),
                _ => {}
            }
        }
    }
    AuthError::Database(err)
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct IdentityRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    bio: Option<String>,
    image: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl IdentityRow {
    fn into_identity(self) -> AuthResult<Identity> {
        let password = UserPassword::from_phc_string(self.password_hash).map_err(|e| {
            AuthError::Internal(format!("Invalid password hash for user {}: {}", self.id, e))
        })?;

        Ok(Identity {
            id: UserId::new(self.id),
            username: Username::from_db(self.username),
            email: Email::from_db(self.email),
            password,
            bio: self.bio,
            image: self.image,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
