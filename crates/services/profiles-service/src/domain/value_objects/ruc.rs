use std::fmt;

use domain::{DomainError, DomainResult, RUC_LENGTH};

/// Peruvian taxpayer registry number: exactly 11 ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ruc(String);

impl Ruc {
    pub fn new(ruc: &str) -> DomainResult<Self> {
        if ruc.trim().is_empty() {
            return Err(DomainError::validation("RUC cannot be blank"));
        }
        if ruc.chars().count() != RUC_LENGTH {
            return Err(DomainError::validation(format!(
                "RUC must have exactly {} digits",
                RUC_LENGTH
            )));
        }
        if !ruc.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation("RUC must contain only digits"));
        }

        Ok(Self(ruc.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Ruc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
