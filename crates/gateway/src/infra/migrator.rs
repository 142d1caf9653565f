//! One migrator over both bounded contexts.

use sea_orm_migration::prelude::*;

/// Runs the profiles migrations, then the IAM ones.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        let mut migrations = profiles_service::infra::migrations();
        migrations.extend(iam_service::infra::migrations());
        migrations
    }
}
