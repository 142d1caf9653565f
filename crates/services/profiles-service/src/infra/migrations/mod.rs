//! Database migrations for the profiles context.
//!
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}.
//! The gateway's migrator runs these alongside the IAM migrations.

use sea_orm_migration::prelude::*;

mod m20250101_000001_create_profiles_table;

/// Migrations in application order.
pub fn migrations() -> Vec<Box<dyn MigrationTrait>> {
    vec![Box::new(m20250101_000001_create_profiles_table::Migration)]
}
