//! Application services of the IAM context.

mod role_command_service;
mod role_query_service;
mod token_service;
mod user_command_service;
mod user_query_service;

pub use role_command_service::{RoleCommandService, RoleCommandServiceImpl};
pub use role_query_service::{RoleQueryService, RoleQueryServiceImpl};
pub use token_service::{Claims, JwtTokenService, TokenService};
pub use user_command_service::{UserCommandService, UserCommandServiceImpl};
pub use user_query_service::{UserQueryService, UserQueryServiceImpl};

#[cfg(any(test, feature = "test-utils"))]
pub use token_service::MockTokenService;
