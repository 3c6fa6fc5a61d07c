//! Credential Verifier
//!
//! Password hashing and verification with the configured pepper.
//! Plaintext and hashes never reach logs.

use platform::password::ClearTextPassword;
use std::sync::OnceLock;

use crate::domain::value_object::user_password::{RawPassword, UserPassword};
use crate::error::AuthResult;

/// Hash verified against when the login email is unknown
static DUMMY_HASH: OnceLock<Option<UserPassword>> = OnceLock::new();

#[derive(Debug, Clone, Default)]
pub struct CredentialVerifier {
    pepper: Option<Vec<u8>>,
}

impl CredentialVerifier {
    pub fn new(pepper: Option<Vec<u8>>) -> Self {
        Self { pepper }
    }

    /// Hash a policy-checked password for storage
    pub fn hash(&self, password: &RawPassword) -> AuthResult<UserPassword> {
        Ok(UserPassword::from_raw(password, self.pepper.as_deref())?)
    }

    /// Whether `candidate` matches `stored`
    ///
    /// The candidate is only normalized, not policy-checked: the stored hash
    /// is the sole authority at login. The input buffer is zeroized.
    pub fn matches(&self, candidate: String, stored: &UserPassword) -> bool {
        let candidate = ClearTextPassword::for_verification(candidate);
        stored.verify(&candidate, self.pepper.as_deref())
    }

    /// Spend one verification's worth of work on a throwaway hash
    ///
    /// Keeps "unknown email" as slow as "wrong password".
    pub fn burn(&self, candidate: String) {
        let dummy = DUMMY_HASH.get_or_init(|| {
            RawPassword::new("dummy-password-for-timing".to_owned())
                .ok()
                .and_then(|raw| UserPassword::from_raw(&raw, None).ok())
        });
        if let Some(dummy) = dummy {
            let _ = self.matches(candidate, dummy);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(s: &str) -> RawPassword {
        RawPassword::new(s.to_string()).unwrap()
    }

    #[test]
    fn test_hash_and_match() {
        let verifier = CredentialVerifier::default();
        let stored = verifier.hash(&raw("jakejake")).unwrap();
        assert!(verifier.matches("jakejake".into(), &stored));
        assert!(!verifier.matches("jakejakf".into(), &stored));
        assert!(!verifier.matches(String::new(), &stored));
    }

    #[test]
    fn test_pepper_must_match() {
        let peppered = CredentialVerifier::new(Some(b"pepper".to_vec()));
        let stored = peppered.hash(&raw("jakejake")).unwrap();

        let unpeppered = CredentialVerifier::default();
        assert!(peppered.matches("jakejake".into(), &stored));
        assert!(!unpeppered.matches("jakejake".into(), &stored));
    }

    #[test]
    fn test_stored_hash_is_not_plaintext() {
        let verifier = CredentialVerifier::default();
        let stored = verifier.hash(&raw("jakejake")).unwrap();
        assert!(!stored.as_phc_string().contains("jakejake"));
        assert!(stored.as_phc_string().starts_with("$argon2id$"));
    }

    #[test]
    fn test_burn_does_not_panic() {
        CredentialVerifier::default().burn("anything".into());
        CredentialVerifier::default().burn(String::new());
    }
}
