//! Entity Module

pub mod identity;

pub use identity::{Identity, IdentityChanges, NewIdentity};
