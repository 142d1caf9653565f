//! Wire contract of the profiles context: REST resources and the pure
//! assemblers that translate them to commands and back.

pub mod assemblers;
pub mod resources;

pub use assemblers::{CreateProfileCommandFromResourceAssembler, ProfileResourceFromEntityAssembler};
pub use resources::{CreateProfileResource, ProfileResource};
