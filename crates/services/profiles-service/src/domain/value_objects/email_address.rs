use std::fmt;

use validator::ValidateEmail;

use domain::{DomainError, DomainResult, MAX_EMAIL_LENGTH};

/// Email address that identifies a profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(email: &str) -> DomainResult<Self> {
        let email = email.trim();
        if email.is_empty() {
            return Err(DomainError::validation("Email cannot be blank"));
        }
        if email.chars().count() > MAX_EMAIL_LENGTH {
            return Err(DomainError::validation(format!(
                "Email cannot exceed {} characters",
                MAX_EMAIL_LENGTH
            )));
        }
        if !email.validate_email() {
            return Err(DomainError::validation("Invalid email format"));
        }

        Ok(Self(email.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
