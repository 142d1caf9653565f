//! Anti-corruption boundary offered to other bounded contexts.
//!
//! Inputs and outputs are primitives only. Absence is `None` and failures
//! keep their `AppError` variant; there is no magic id.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;

use crate::domain::{CreateProfileCommand, DeleteProfileCommand, GetProfileByEmailQuery};
use crate::service::{ProfileCommandService, ProfileQueryService};

#[async_trait]
pub trait ProfilesContextFacade: Send + Sync {
    /// Create a profile and return its id.
    async fn create_profile(
        &self,
        ruc: &str,
        razon_social: &str,
        email: &str,
        password: &str,
        nombre_contacto: Option<&str>,
    ) -> AppResult<i64>;

    /// Id of the profile registered under `email`, if any.
    async fn fetch_profile_id_by_email(&self, email: &str) -> AppResult<Option<i64>>;

    /// Remove a profile created by `create_profile` whose owner was never stored.
    async fn delete_profile(&self, profile_id: i64) -> AppResult<()>;
}

pub struct ProfilesFacade {
    commands: Arc<dyn ProfileCommandService>,
    queries: Arc<dyn ProfileQueryService>,
}

impl ProfilesFacade {
    pub fn new(
        commands: Arc<dyn ProfileCommandService>,
        queries: Arc<dyn ProfileQueryService>,
    ) -> Self {
        Self { commands, queries }
    }
}

#[async_trait]
impl ProfilesContextFacade for ProfilesFacade {
    async fn create_profile(
        &self,
        ruc: &str,
        razon_social: &str,
        email: &str,
        password: &str,
        nombre_contacto: Option<&str>,
    ) -> AppResult<i64> {
        let command = CreateProfileCommand {
            ruc: ruc.to_string(),
            razon_social: razon_social.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            nombre_contacto: nombre_contacto.map(str::to_string),
        };

        let profile = self.commands.handle(command).await?;
        Ok(profile.id())
    }

    async fn fetch_profile_id_by_email(&self, email: &str) -> AppResult<Option<i64>> {
        let query = GetProfileByEmailQuery {
            email: email.to_string(),
        };
        let profile = self.queries.get_by_email(query).await?;
        Ok(profile.map(|p| p.id()))
    }

    async fn delete_profile(&self, profile_id: i64) -> AppResult<()> {
        self.commands
            .handle_delete(DeleteProfileCommand { profile_id })
            .await
    }
}
