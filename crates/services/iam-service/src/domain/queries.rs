//! IAM queries.

use super::role::Roles;

#[derive(Debug, Clone, Copy, Default)]
pub struct GetAllUsersQuery;

#[derive(Debug, Clone, Copy)]
pub struct GetUserByIdQuery {
    pub user_id: i64,
}

#[derive(Debug, Clone)]
pub struct GetUserByUsernameQuery {
    pub username: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GetAllRolesQuery;

#[derive(Debug, Clone, Copy)]
pub struct GetRoleByNameQuery {
    pub name: Roles,
}
