//! Role command service - startup seeding.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;

use crate::domain::{Roles, SeedRolesCommand};
use crate::repository::RoleRepository;

#[async_trait]
pub trait RoleCommandService: Send + Sync {
    /// Insert every missing role tag. Running it again is a no-op.
    async fn handle(&self, command: SeedRolesCommand) -> AppResult<()>;
}

pub struct RoleCommandServiceImpl {
    repo: Arc<dyn RoleRepository>,
}

impl RoleCommandServiceImpl {
    pub fn new(repo: Arc<dyn RoleRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl RoleCommandService for RoleCommandServiceImpl {
    async fn handle(&self, _command: SeedRolesCommand) -> AppResult<()> {
        let mut seeded = Vec::new();
        for name in Roles::ALL {
            if !self.repo.exists_by_name(name).await? {
                self.repo.create(name).await?;
                seeded.push(name.as_str());
            }
        }

        if seeded.is_empty() {
            tracing::debug!("Roles already seeded");
        } else {
            tracing::info!(roles = ?seeded, "Roles seeded");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    use crate::domain::Role;
    use crate::repository::MockRoleRepository;

    #[tokio::test]
    async fn test_seed_creates_only_missing_roles() {
        let mut repo = MockRoleRepository::new();
        repo.expect_exists_by_name()
            .returning(|name| Ok(name == Roles::RoleIssuer));
        repo.expect_create()
            .with(eq(Roles::RoleInvestor))
            .times(1)
            .returning(|name| Ok(Role::with_id(2, name)));
        repo.expect_create()
            .with(eq(Roles::RoleAdmin))
            .times(1)
            .returning(|name| Ok(Role::with_id(3, name)));

        let service = RoleCommandServiceImpl::new(Arc::new(repo));
        service.handle(SeedRolesCommand).await.unwrap();
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let mut repo = MockRoleRepository::new();
        repo.expect_exists_by_name().returning(|_| Ok(true));
        repo.expect_create().never();

        let service = RoleCommandServiceImpl::new(Arc::new(repo));
        service.handle(SeedRolesCommand).await.unwrap();
    }
}
