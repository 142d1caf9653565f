//! User aggregate, roles, commands and queries.

pub mod commands;
pub mod queries;
pub mod role;
pub mod user;

pub use commands::{SeedRolesCommand, SignInCommand, SignUpCommand, SignUpProfile};
pub use queries::{
    GetAllRolesQuery, GetAllUsersQuery, GetRoleByNameQuery, GetUserByIdQuery,
    GetUserByUsernameQuery,
};
pub use role::{Role, Roles};
pub use user::User;
