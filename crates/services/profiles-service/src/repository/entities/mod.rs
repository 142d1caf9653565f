//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod profile;

#[allow(unused_imports)]
pub use profile::{ActiveModel as ProfileActiveModel, Entity as ProfileEntity, Model as ProfileModel};
