//! Commands accepted by the profiles context.

use std::fmt;

/// Request to register a new company profile.
///
/// Carries raw input; the value objects are built (and validated) by the
/// command service.
#[derive(Clone, PartialEq, Eq)]
pub struct CreateProfileCommand {
    pub ruc: String,
    pub razon_social: String,
    pub email: String,
    pub password: String,
    pub nombre_contacto: Option<String>,
}

impl fmt::Debug for CreateProfileCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateProfileCommand")
            .field("ruc", &self.ruc)
            .field("razon_social", &self.razon_social)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("nombre_contacto", &self.nombre_contacto)
            .finish()
    }
}

/// Remove a profile that was created but never linked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteProfileCommand {
    pub profile_id: i64,
}
