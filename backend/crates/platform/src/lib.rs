//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, NIST SP 800-63B compliant)
//! - `Authorization` header extraction
//! - Environment configuration helpers

pub mod config;
pub mod header;
pub mod password;
