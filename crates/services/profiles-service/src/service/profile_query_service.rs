//! Profile query service - read side of the profiles context.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;

use crate::domain::{GetAllProfilesQuery, GetProfileByEmailQuery, GetProfileByIdQuery, Profile};
use crate::repository::ProfileRepository;

/// Absence is `Ok(None)`; callers decide whether that is a 404.
#[async_trait]
pub trait ProfileQueryService: Send + Sync {
    async fn get_by_id(&self, query: GetProfileByIdQuery) -> AppResult<Option<Profile>>;

    async fn get_by_email(&self, query: GetProfileByEmailQuery) -> AppResult<Option<Profile>>;

    async fn get_all(&self, query: GetAllProfilesQuery) -> AppResult<Vec<Profile>>;
}

pub struct ProfileQueryServiceImpl {
    repo: Arc<dyn ProfileRepository>,
}

impl ProfileQueryServiceImpl {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ProfileQueryService for ProfileQueryServiceImpl {
    async fn get_by_id(&self, query: GetProfileByIdQuery) -> AppResult<Option<Profile>> {
        self.repo.find_by_id(query.profile_id).await
    }

    async fn get_by_email(&self, query: GetProfileByEmailQuery) -> AppResult<Option<Profile>> {
        self.repo.find_by_email(query.email.trim()).await
    }

    async fn get_all(&self, _query: GetAllProfilesQuery) -> AppResult<Vec<Profile>> {
        self.repo.list().await
    }
}
