//! Shared kernel for the BonoYa bounded contexts.
//!
//! Holds the pieces every context agrees on: domain errors, business
//! constants, audit timestamps and the one-way password hash. Nothing here
//! knows about HTTP or the database.

pub mod audit;
pub mod constants;
pub mod error;
pub mod password;

pub use audit::AuditFields;
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use password::HashedPassword;
