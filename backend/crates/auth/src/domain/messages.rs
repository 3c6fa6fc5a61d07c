//! Client-facing validation messages
//!
//! Rendered after the field name, e.g. `{"username": ["has already been taken"]}`.

pub const EMPTY_MSG: &str = "can't be empty";
pub const INVALID_MSG: &str = "is invalid";
pub const TAKEN_MSG: &str = "has already been taken";

/// Login failure. Same key shape whether the email is unknown or the password wrong.
pub const INVALID_CREDENTIALS_MSG: &str = "invalid credentials";
