//! Profile aggregate, its value objects, commands and queries.

pub mod commands;
pub mod profile;
pub mod queries;
pub mod value_objects;

pub use commands::{CreateProfileCommand, DeleteProfileCommand};
pub use profile::{NewProfile, Profile};
pub use queries::{GetAllProfilesQuery, GetProfileByEmailQuery, GetProfileByIdQuery};
pub use value_objects::{EmailAddress, NombreContacto, Password, RazonSocial, Ruc};
