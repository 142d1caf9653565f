use std::fmt;

use domain::{DomainError, DomainResult, MAX_NOMBRE_CONTACTO_LENGTH};

/// Optional name of the company's contact person.
///
/// A missing or blank name is stored as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NombreContacto(Option<String>);

impl NombreContacto {
    pub fn new(nombre: Option<&str>) -> DomainResult<Self> {
        match nombre {
            Some(nombre) if nombre.chars().count() > MAX_NOMBRE_CONTACTO_LENGTH => {
                Err(DomainError::validation(format!(
                    "Nombre de contacto cannot exceed {} characters",
                    MAX_NOMBRE_CONTACTO_LENGTH
                )))
            }
            Some(nombre) if !nombre.trim().is_empty() => Ok(Self(Some(nombre.to_string()))),
            _ => Ok(Self(None)),
        }
    }

    /// The trimmed name, if any.
    pub fn as_option(&self) -> Option<&str> {
        self.0.as_deref().map(str::trim)
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }
}

impl fmt::Display for NombreContacto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_option().unwrap_or_default())
    }
}
