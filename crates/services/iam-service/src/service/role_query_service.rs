//! Role query service.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;

use crate::domain::{GetAllRolesQuery, GetRoleByNameQuery, Role};
use crate::repository::RoleRepository;

#[async_trait]
pub trait RoleQueryService: Send + Sync {
    async fn get_all(&self, query: GetAllRolesQuery) -> AppResult<Vec<Role>>;

    async fn get_by_name(&self, query: GetRoleByNameQuery) -> AppResult<Option<Role>>;
}

pub struct RoleQueryServiceImpl {
    repo: Arc<dyn RoleRepository>,
}

impl RoleQueryServiceImpl {
    pub fn new(repo: Arc<dyn RoleRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl RoleQueryService for RoleQueryServiceImpl {
    async fn get_all(&self, _query: GetAllRolesQuery) -> AppResult<Vec<Role>> {
        self.repo.list().await
    }

    async fn get_by_name(&self, query: GetRoleByNameQuery) -> AppResult<Option<Role>> {
        self.repo.find_by_name(query.name).await
    }
}
