//! Profile command and query services.

mod profile_command_service;
mod profile_query_service;

pub use profile_command_service::{ProfileCommandService, ProfileCommandServiceImpl};
pub use profile_query_service::{ProfileQueryService, ProfileQueryServiceImpl};
