use domain::{DomainError, DomainResult, HashedPassword, MIN_PROFILE_PASSWORD_LENGTH};

/// Plaintext profile password, validated but not yet hashed.
///
/// Profiles accept shorter passwords than user accounts; the two rules are
/// intentionally independent.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

impl Password {
    pub fn new(password: &str) -> DomainResult<Self> {
        if password.trim().is_empty() {
            return Err(DomainError::validation("Password cannot be blank"));
        }
        if password.chars().count() < MIN_PROFILE_PASSWORD_LENGTH {
            return Err(DomainError::validation(format!(
                "Password must be at least {} characters",
                MIN_PROFILE_PASSWORD_LENGTH
            )));
        }

        Ok(Self(password.to_string()))
    }

    /// Hash for storage, consuming the plaintext.
    pub fn hash(self) -> DomainResult<HashedPassword> {
        HashedPassword::hash(&self.0)
    }
}
