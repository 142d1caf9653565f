use std::fmt;

use domain::{DomainError, DomainResult, MAX_RAZON_SOCIAL_LENGTH};

/// Registered legal name of the company.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RazonSocial(String);

impl RazonSocial {
    pub fn new(razon_social: &str) -> DomainResult<Self> {
        if razon_social.trim().is_empty() {
            return Err(DomainError::validation("Razon social cannot be blank"));
        }
        if razon_social.chars().count() > MAX_RAZON_SOCIAL_LENGTH {
            return Err(DomainError::validation(format!(
                "Razon social cannot exceed {} characters",
                MAX_RAZON_SOCIAL_LENGTH
            )));
        }

        Ok(Self(razon_social.to_string()))
    }

    pub fn as_str(&self) -> &str {
        self.0.trim()
    }
}

impl fmt::Display for RazonSocial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
