//! User query service - read side of the IAM context.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;

use crate::domain::{GetAllUsersQuery, GetUserByIdQuery, GetUserByUsernameQuery, User};
use crate::repository::UserRepository;

/// Absence is `Ok(None)`; callers decide whether that is a 404.
#[async_trait]
pub trait UserQueryService: Send + Sync {
    async fn get_all(&self, query: GetAllUsersQuery) -> AppResult<Vec<User>>;

    async fn get_by_id(&self, query: GetUserByIdQuery) -> AppResult<Option<User>>;

    async fn get_by_username(&self, query: GetUserByUsernameQuery) -> AppResult<Option<User>>;
}

pub struct UserQueryServiceImpl {
    repo: Arc<dyn UserRepository>,
}

impl UserQueryServiceImpl {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserQueryService for UserQueryServiceImpl {
    async fn get_all(&self, _query: GetAllUsersQuery) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn get_by_id(&self, query: GetUserByIdQuery) -> AppResult<Option<User>> {
        self.repo.find_by_id(query.user_id).await
    }

    async fn get_by_username(&self, query: GetUserByUsernameQuery) -> AppResult<Option<User>> {
        self.repo.find_by_username(query.username.trim()).await
    }
}
