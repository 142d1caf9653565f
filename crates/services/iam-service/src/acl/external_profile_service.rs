//! IAM-side view of the profiles context.
//!
//! Only primitives cross the boundary; profile value objects stay inside
//! the profiles crate.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult};
use profiles_service::ProfilesContextFacade;

use crate::domain::SignUpProfile;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ExternalProfileService: Send + Sync {
    /// Create the profile for a signing-up user and return its id.
    ///
    /// An email that already has a profile is a `Conflict`.
    async fn create_profile(&self, profile: &SignUpProfile, password: &str) -> AppResult<i64>;

    async fn fetch_profile_id_by_email(&self, email: &str) -> AppResult<Option<i64>>;

    /// Undo `create_profile` when the user it was made for is not stored.
    async fn delete_profile(&self, profile_id: i64) -> AppResult<()>;
}

pub struct ExternalProfileServiceImpl {
    facade: Arc<dyn ProfilesContextFacade>,
}

impl ExternalProfileServiceImpl {
    pub fn new(facade: Arc<dyn ProfilesContextFacade>) -> Self {
        Self { facade }
    }
}

#[async_trait]
impl ExternalProfileService for ExternalProfileServiceImpl {
    async fn create_profile(&self, profile: &SignUpProfile, password: &str) -> AppResult<i64> {
        if let Some(existing) = self.fetch_profile_id_by_email(&profile.email).await? {
            tracing::debug!(profile_id = existing, "Sign-up email already has a profile");
            return Err(AppError::conflict("Profile"));
        }

        self.facade
            .create_profile(
                &profile.ruc,
                &profile.razon_social,
                &profile.email,
                password,
                profile.nombre_contacto.as_deref(),
            )
            .await
    }

    async fn fetch_profile_id_by_email(&self, email: &str) -> AppResult<Option<i64>> {
        self.facade.fetch_profile_id_by_email(email).await
    }

    async fn delete_profile(&self, profile_id: i64) -> AppResult<()> {
        self.facade.delete_profile(profile_id).await
    }
}
