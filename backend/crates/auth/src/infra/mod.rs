//! Infrastructure Layer
//!
//! Datastore implementations of the identity repository.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryIdentityRepository;
pub use postgres::PgIdentityRepository;
