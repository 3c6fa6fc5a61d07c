//! API DTOs (Data Transfer Objects)
//!
//! Every body is wrapped in a single-key `{"user": {...}}` envelope.
//! Request fields are all optional so missing fields surface as
//! validation errors instead of JSON rejections. Request types carry
//! passwords and deliberately have no `Debug`.

use serde::{Deserialize, Serialize};

use crate::application::{LoginInput, RegisterInput, UpdateUserInput, UserOutput};

/// `{"user": ...}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEnvelope<T> {
    pub user: T,
}

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Clone, Default, Deserialize)]
pub struct RegisterUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<RegisterUser> for RegisterInput {
    fn from(req: RegisterUser) -> Self {
        Self {
            username: req.username,
            email: req.email,
            password: req.password,
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Clone, Default, Deserialize)]
pub struct LoginUser {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<LoginUser> for LoginInput {
    fn from(req: LoginUser) -> Self {
        Self {
            email: req.email,
            password: req.password,
        }
    }
}

// ============================================================================
// Update
// ============================================================================

/// Update request. Absent fields are left unchanged.
#[derive(Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl From<UpdateUser> for UpdateUserInput {
    fn from(req: UpdateUser) -> Self {
        Self {
            username: req.username,
            email: req.email,
            password: req.password,
            bio: req.bio,
            image: req.image,
        }
    }
}

// ============================================================================
// Response
// ============================================================================

/// Identity with a fresh token. `bio` and `image` serialize as `null` when unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub username: String,
    pub email: String,
    pub token: String,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl From<UserOutput> for UserResponse {
    fn from(output: UserOutput) -> Self {
        Self {
            username: output.username,
            email: output.email,
            token: output.token,
            bio: output.bio,
            image: output.image,
        }
    }
}

impl From<UserOutput> for UserEnvelope<UserResponse> {
    fn from(output: UserOutput) -> Self {
        Self {
            user: output.into(),
        }
    }
}
