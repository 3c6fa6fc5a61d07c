//! Claims Codec
//!
//! Serializes [`Claims`] into a compact HS256 JWS (`header.payload.signature`)
//! and back.
//!
//! ## Decode order
//! 1. Size guard (8 KiB) and `header.payload.signature` shape → `Malformed`
//! 2. Header `alg` must be HS256 → `AlgorithmMismatch`
//! 3. Signature segment must be canonical base64url → `SignatureInvalid`
//! 4. HMAC recomputed and compared in constant time → `SignatureInvalid`
//! 5. Payload shape and issuer → `Malformed`
//! 6. `now >= exp` → `Expired`

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Deserialize;

use crate::domain::claims::Claims;
use crate::error::{AuthError, AuthResult, DecodeError};

/// The only accepted signing algorithm
pub const ALGORITHM: Algorithm = Algorithm::HS256;

/// Tokens above this size are rejected before any parsing
pub const MAX_TOKEN_BYTES: usize = 8 * 1024;

/// Just enough of the JOSE header to police the algorithm
#[derive(Deserialize)]
struct JoseHeader {
    alg: String,
}

#[derive(Clone)]
pub struct ClaimsCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl ClaimsCodec {
    /// Codec signing with `secret`, accepting only tokens issued by `issuer`
    pub fn new(secret: &[u8], issuer: &str) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        // Expiry is checked against an explicit clock in `decode_at`.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp", "iss"]);
        validation.set_issuer(&[issuer]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    pub fn encode(&self, claims: &Claims) -> AuthResult<String> {
        jsonwebtoken::encode(&Header::new(ALGORITHM), claims, &self.encoding)
            .map_err(|e| AuthError::Internal(format!("signing failed: {e}")))
    }

    pub fn decode(&self, token: &str) -> Result<Claims, DecodeError> {
        self.decode_at(token, Utc::now())
    }

    /// Decode and check expiry against `now`
    pub fn decode_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, DecodeError> {
        if token.len() > MAX_TOKEN_BYTES {
            return Err(DecodeError::Malformed);
        }

        // Everything after the second dot is the signature
        let mut segments = token.splitn(3, '.');
        let (Some(header), Some(_payload), Some(signature)) =
            (segments.next(), segments.next(), segments.next())
        else {
            return Err(DecodeError::Malformed);
        };

        check_algorithm(header)?;

        URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| DecodeError::SignatureInvalid)?;

        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|e| match e.kind() {
                JwtErrorKind::InvalidSignature => DecodeError::SignatureInvalid,
                JwtErrorKind::InvalidAlgorithm => DecodeError::AlgorithmMismatch,
                JwtErrorKind::ExpiredSignature => DecodeError::Expired,
                _ => DecodeError::Malformed,
            })?;

        if data.claims.is_expired_at(now) {
            return Err(DecodeError::Expired);
        }

        Ok(data.claims)
    }
}

fn check_algorithm(header: &str) -> Result<(), DecodeError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(header)
        .map_err(|_| DecodeError::Malformed)?;
    let header: JoseHeader = serde_json::from_slice(&bytes).map_err(|_| DecodeError::Malformed)?;

    if header.alg == "HS256" {
        Ok(())
    } else {
        Err(DecodeError::AlgorithmMismatch)
    }
}
