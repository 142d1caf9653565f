//! Profile command service - write side of the profiles context.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;

use crate::domain::{CreateProfileCommand, DeleteProfileCommand, NewProfile, Profile};
use crate::repository::ProfileRepository;

#[async_trait]
pub trait ProfileCommandService: Send + Sync {
    /// Validate, hash and persist a new profile.
    ///
    /// Fails with `Validation` on a bad field and `Conflict` when the email
    /// already has a profile.
    async fn handle(&self, command: CreateProfileCommand) -> AppResult<Profile>;

    async fn handle_delete(&self, command: DeleteProfileCommand) -> AppResult<()>;
}

pub struct ProfileCommandServiceImpl {
    repo: Arc<dyn ProfileRepository>,
}

impl ProfileCommandServiceImpl {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ProfileCommandService for ProfileCommandServiceImpl {
    async fn handle(&self, command: CreateProfileCommand) -> AppResult<Profile> {
        let new_profile = NewProfile::from_command(command)?;
        let email = new_profile.email.to_string();

        match self.repo.create_unique(new_profile).await {
            Ok(profile) => {
                tracing::info!(profile_id = profile.id(), "Profile created");
                Ok(profile)
            }
            Err(e) => {
                tracing::warn!(%email, error = %e, "Profile creation rejected");
                Err(e)
            }
        }
    }

    async fn handle_delete(&self, command: DeleteProfileCommand) -> AppResult<()> {
        self.repo.delete(command.profile_id).await?;
        tracing::info!(profile_id = command.profile_id, "Profile deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppError;
    use domain::AuditFields;

    use crate::repository::MockProfileRepository;

    fn command(email: &str) -> CreateProfileCommand {
        CreateProfileCommand {
            ruc: "20123456789".to_string(),
            razon_social: "Acme Peru S.A.C.".to_string(),
            email: email.to_string(),
            password: "secret1".to_string(),
            nombre_contacto: None,
        }
    }

    #[tokio::test]
    async fn test_create_profile_success() {
        let mut repo = MockProfileRepository::new();
        repo.expect_create_unique()
            .times(1)
            .returning(|new_profile| Ok(Profile::from_new(10, new_profile, AuditFields::now())));

        let service = ProfileCommandServiceImpl::new(Arc::new(repo));
        let profile = service.handle(command("finanzas@acme.pe")).await.unwrap();

        assert_eq!(profile.id(), 10);
        assert_eq!(profile.email().as_str(), "finanzas@acme.pe");
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let mut repo = MockProfileRepository::new();
        repo.expect_create_unique()
            .returning(|_| Err(AppError::conflict("Profile")));

        let service = ProfileCommandServiceImpl::new(Arc::new(repo));
        let result = service.handle(command("finanzas@acme.pe")).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_repository() {
        let mut repo = MockProfileRepository::new();
        repo.expect_create_unique().never();

        let service = ProfileCommandServiceImpl::new(Arc::new(repo));
        let mut cmd = command("finanzas@acme.pe");
        cmd.ruc = "123".to_string();

        let result = service.handle(cmd).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_profile_by_id() {
        let mut repo = MockProfileRepository::new();
        repo.expect_delete()
            .with(mockall::predicate::eq(10))
            .times(1)
            .returning(|_| Ok(()));

        let service = ProfileCommandServiceImpl::new(Arc::new(repo));
        let result = service
            .handle_delete(DeleteProfileCommand { profile_id: 10 })
            .await;

        tokio_test::assert_ok!(result);
    }
}
