//! Database migrations for the IAM context.
//!
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}.

use sea_orm_migration::prelude::*;

mod m20250101_000002_create_roles_table;
mod m20250101_000003_create_users_table;
mod m20250101_000004_create_user_roles_table;

/// Migrations in application order.
pub fn migrations() -> Vec<Box<dyn MigrationTrait>> {
    vec![
        Box::new(m20250101_000002_create_roles_table::Migration),
        Box::new(m20250101_000003_create_users_table::Migration),
        Box::new(m20250101_000004_create_user_roles_table::Migration),
    ]
}

#[derive(Iden)]
pub(crate) enum Roles {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
pub(crate) enum Users {
    Table,
    Id,
    Username,
    PasswordHash,
    ProfileId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
pub(crate) enum UserRoles {
    Table,
    UserId,
    RoleId,
}
