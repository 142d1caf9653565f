//! Profile aggregate root.

use domain::{AuditFields, DomainResult, HashedPassword};

use super::commands::CreateProfileCommand;
use super::value_objects::{EmailAddress, NombreContacto, Password, RazonSocial, Ruc};

/// A profile that passed validation but has no identity yet.
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub ruc: Ruc,
    pub razon_social: RazonSocial,
    pub email: EmailAddress,
    pub password: HashedPassword,
    pub nombre_contacto: NombreContacto,
}

impl NewProfile {
    /// Build every value object from the command, failing on the first
    /// invalid field, then hash the password.
    pub fn from_command(command: CreateProfileCommand) -> DomainResult<Self> {
        let email = EmailAddress::new(&command.email)?;
        let ruc = Ruc::new(&command.ruc)?;
        let razon_social = RazonSocial::new(&command.razon_social)?;
        let nombre_contacto = NombreContacto::new(command.nombre_contacto.as_deref())?;
        let password = Password::new(&command.password)?.hash()?;

        Ok(Self {
            ruc,
            razon_social,
            email,
            password,
            nombre_contacto,
        })
    }
}

/// Persisted company/tenant profile.
///
/// Value-object fields are fixed at creation; only the audit timestamps
/// move afterwards.
#[derive(Debug, Clone)]
pub struct Profile {
    id: i64,
    ruc: Ruc,
    razon_social: RazonSocial,
    email: EmailAddress,
    password: HashedPassword,
    nombre_contacto: NombreContacto,
    audit: AuditFields,
}

impl Profile {
    /// Attach the store-assigned identity to a validated profile.
    pub fn from_new(id: i64, new_profile: NewProfile, audit: AuditFields) -> Self {
        Self {
            id,
            ruc: new_profile.ruc,
            razon_social: new_profile.razon_social,
            email: new_profile.email,
            password: new_profile.password,
            nombre_contacto: new_profile.nombre_contacto,
            audit,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn ruc(&self) -> &Ruc {
        &self.ruc
    }

    pub fn razon_social(&self) -> &RazonSocial {
        &self.razon_social
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn password(&self) -> &HashedPassword {
        &self.password
    }

    pub fn nombre_contacto(&self) -> &NombreContacto {
        &self.nombre_contacto
    }

    pub fn audit(&self) -> &AuditFields {
        &self.audit
    }

    /// Check a plaintext against the stored profile password.
    pub fn verify_password(&self, plain_text: &str) -> bool {
        self.password.verify(plain_text)
    }
}
