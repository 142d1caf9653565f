//! Application state for dependency injection.

use std::sync::Arc;

use iam_service::{
    repository::{RoleStore, UserStore},
    ExternalProfileServiceImpl, JwtTokenService, RoleCommandService, RoleCommandServiceImpl,
    RoleQueryService, RoleQueryServiceImpl, TokenService, UserCommandService,
    UserCommandServiceImpl, UserQueryService, UserQueryServiceImpl,
};
use profiles_service::{
    repository::ProfileStore, ProfileCommandService, ProfileCommandServiceImpl,
    ProfileQueryService, ProfileQueryServiceImpl, ProfilesFacade,
};

use crate::config::Config;
use crate::infra::{Database, HealthProbe};

/// Application state shared across handlers.
///
/// Every collaborator sits behind a trait object so tests can swap in
/// stubs without a database.
#[derive(Clone)]
pub struct AppState {
    pub user_commands: Arc<dyn UserCommandService>,
    pub user_queries: Arc<dyn UserQueryService>,
    pub role_commands: Arc<dyn RoleCommandService>,
    pub role_queries: Arc<dyn RoleQueryService>,
    pub profile_commands: Arc<dyn ProfileCommandService>,
    pub profile_queries: Arc<dyn ProfileQueryService>,
    pub tokens: Arc<dyn TokenService>,
    pub health: Arc<dyn HealthProbe>,
}

impl AppState {
    /// Wire both contexts onto one connection pool.
    pub fn from_database(database: Database, config: &Config) -> Self {
        let connection = database.get_connection();

        let profile_repo = Arc::new(ProfileStore::new(connection.clone()));
        let profile_commands: Arc<dyn ProfileCommandService> =
            Arc::new(ProfileCommandServiceImpl::new(profile_repo.clone()));
        let profile_queries: Arc<dyn ProfileQueryService> =
            Arc::new(ProfileQueryServiceImpl::new(profile_repo));

        let facade = Arc::new(ProfilesFacade::new(
            profile_commands.clone(),
            profile_queries.clone(),
        ));
        let external_profiles = Arc::new(ExternalProfileServiceImpl::new(facade));

        let user_repo = Arc::new(UserStore::new(connection.clone()));
        let role_repo = Arc::new(RoleStore::new(connection));
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(config.jwt.clone()));

        Self {
            user_commands: Arc::new(UserCommandServiceImpl::new(
                user_repo.clone(),
                role_repo.clone(),
                external_profiles,
                tokens.clone(),
            )),
            user_queries: Arc::new(UserQueryServiceImpl::new(user_repo)),
            role_commands: Arc::new(RoleCommandServiceImpl::new(role_repo.clone())),
            role_queries: Arc::new(RoleQueryServiceImpl::new(role_repo)),
            profile_commands,
            profile_queries,
            tokens,
            health: Arc::new(database),
        }
    }
}
