//! Numeric identity ID, assigned by the datastore on insert and immutable after.

pub use kernel::id::UserId;
