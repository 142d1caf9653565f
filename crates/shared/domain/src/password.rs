//! One-way password hash shared by every bounded context.
//!
//! Plaintext rules differ per context (users vs. profiles), so callers
//! validate the plaintext first and only then hash it here.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{DomainError, DomainResult};

/// Placeholder digest verified against when no stored hash exists, so that
/// unknown accounts cost the same as a wrong password.
pub const DUMMY_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

/// Argon2 digest of a password. Never compared by plaintext equality.
#[derive(Clone)]
pub struct HashedPassword {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl HashedPassword {
    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Errors
    /// Returns an internal error if Argon2 rejects the input.
    pub fn hash(plain_text: &str) -> DomainResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::internal(format!("Password hash failed: {}", e)))?;
        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Wrap a digest loaded from storage.
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Digest used when the account does not exist.
    pub fn dummy() -> Self {
        Self::from_hash(DUMMY_PASSWORD_HASH)
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    ///
    /// A malformed stored digest never verifies.
    pub fn verify(&self, plain_text: &str) -> bool {
        match PasswordHash::new(&self.hash) {
            Ok(parsed) => Self::argon2()
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

impl From<HashedPassword> for String {
    fn from(password: HashedPassword) -> Self {
        password.hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let plain = "SecurePassword123!";
        let password = HashedPassword::hash(plain).unwrap();

        assert!(password.verify(plain));
        assert!(!password.verify("WrongPassword123"));
    }

    #[test]
    fn test_from_hash_round_trips_through_storage() {
        let plain = "TestPassword123";
        let stored = HashedPassword::hash(plain).unwrap().into_string();

        let restored = HashedPassword::from_hash(stored);
        assert!(restored.verify(plain));
    }

    #[test]
    fn test_same_password_different_salts() {
        let plain = "SamePassword123";
        let pass1 = HashedPassword::hash(plain).unwrap();
        let pass2 = HashedPassword::hash(plain).unwrap();

        assert_ne!(pass1.as_str(), pass2.as_str());
        assert!(pass1.verify(plain));
        assert!(pass2.verify(plain));
    }

    #[test]
    fn test_digest_fits_user_password_column() {
        let password = HashedPassword::hash("a-reasonably-long-passphrase").unwrap();
        assert!(password.as_str().len() <= crate::MAX_USER_PASSWORD_LENGTH);
    }

    #[test]
    fn test_dummy_and_garbage_never_verify() {
        assert!(!HashedPassword::dummy().verify("anything"));
        assert!(!HashedPassword::from_hash("not-a-phc-string").verify("anything"));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = HashedPassword::hash("secret123").unwrap();
        let debug = format!("{:?}", password);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains(password.as_str()));
    }
}
