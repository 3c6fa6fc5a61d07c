//! Signed token issuance and verification

pub mod codec;
pub mod service;

pub use codec::ClaimsCodec;
pub use service::{JwtTokenService, TokenService};
