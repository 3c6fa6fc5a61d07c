//! Value Object Module

pub mod email;
pub mod user_id;
pub mod user_password;
pub mod username;

pub use email::{Email, EmailError};
pub use user_id::UserId;
pub use user_password::{RawPassword, UserPassword};
pub use username::{Username, UsernameError};
