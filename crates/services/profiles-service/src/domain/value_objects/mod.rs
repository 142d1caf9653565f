//! Self-validating wrappers around tenant identification and contact data.
//!
//! Every constructor validates and fails with `DomainError::Validation`;
//! once built, a value object never changes.

mod email_address;
mod nombre_contacto;
mod password;
mod razon_social;
mod ruc;

pub use email_address::EmailAddress;
pub use nombre_contacto::NombreContacto;
pub use password::Password;
pub use razon_social::RazonSocial;
pub use ruc::Ruc;
