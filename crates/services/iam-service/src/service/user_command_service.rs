//! User command service - sign-up and sign-in.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult};
use domain::HashedPassword;

use crate::acl::ExternalProfileService;
use crate::domain::{Role, Roles, SignInCommand, SignUpCommand, User};
use crate::repository::{RoleRepository, UserRepository};

use super::token_service::TokenService;

#[async_trait]
pub trait UserCommandService: Send + Sync {
    /// Register a user, optionally creating and linking its profile.
    ///
    /// Fails with `Conflict` when the username (or the profile email) is
    /// taken and `Validation` on bad input.
    async fn handle_sign_up(&self, command: SignUpCommand) -> AppResult<User>;

    /// Check credentials and issue a session token.
    async fn handle_sign_in(&self, command: SignInCommand) -> AppResult<(User, String)>;
}

pub struct UserCommandServiceImpl {
    users: Arc<dyn UserRepository>,
    roles: Arc<dyn RoleRepository>,
    profiles: Arc<dyn ExternalProfileService>,
    tokens: Arc<dyn TokenService>,
}

impl UserCommandServiceImpl {
    pub fn new(
        users: Arc<dyn UserRepository>,
        roles: Arc<dyn RoleRepository>,
        profiles: Arc<dyn ExternalProfileService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            roles,
            profiles,
            tokens,
        }
    }

    /// Map requested tags to their seeded rows; nothing requested means the
    /// default role.
    async fn resolve_roles(&self, requested: &[Roles]) -> AppResult<Vec<Role>> {
        let names = if requested.is_empty() {
            vec![Role::default_role_name()]
        } else {
            requested.to_vec()
        };

        let mut resolved = Vec::with_capacity(names.len());
        for name in names {
            let role = self.roles.find_by_name(name).await?.ok_or_else(|| {
                AppError::internal(format!("Role {} has not been seeded", name))
            })?;
            resolved.push(role);
        }
        Ok(resolved)
    }
}

#[async_trait]
impl UserCommandService for UserCommandServiceImpl {
    async fn handle_sign_up(&self, command: SignUpCommand) -> AppResult<User> {
        let username = command.username.trim();

        if self.users.exists_by_username(username).await? {
            tracing::warn!(%username, "Sign-up rejected: username taken");
            return Err(AppError::conflict("Username"));
        }
        if command.password.trim().is_empty() {
            return Err(AppError::validation("Password cannot be blank"));
        }

        let roles = self.resolve_roles(&command.roles).await?;
        let password = HashedPassword::hash(&command.password)?;
        let mut user = User::with_roles(username, password, Some(roles))?;

        if let Some(profile) = &command.profile {
            let profile_id = self
                .profiles
                .create_profile(profile, &command.password)
                .await
                .inspect_err(|e| {
                    tracing::warn!(%username, error = %e, "Sign-up rejected: profile not created")
                })?;
            user.set_profile(Some(profile_id));
        }

        let linked_profile = user.profile_id();
        let user = match self.users.create(user).await {
            Ok(user) => user,
            Err(e) => {
                // The profile was written in its own context; remove it so the
                // email can sign up again.
                if let Some(profile_id) = linked_profile {
                    if let Err(undo) = self.profiles.delete_profile(profile_id).await {
                        tracing::error!(profile_id, error = %undo, "Could not remove profile of failed sign-up");
                    }
                }
                return Err(e);
            }
        };
        tracing::info!(user_id = ?user.id(), %username, roles = ?user.role_names(), "User signed up");
        Ok(user)
    }

    async fn handle_sign_in(&self, command: SignInCommand) -> AppResult<(User, String)> {
        let user = self.users.find_by_username(command.username.trim()).await?;

        // Verify even for unknown users so both failures cost the same.
        let password_valid = match &user {
            Some(user) => user.verify_password(&command.password),
            None => {
                HashedPassword::dummy().verify(&command.password);
                false
            }
        };

        match user {
            Some(user) if password_valid => {
                let token = self.tokens.generate_token(&user)?;
                tracing::info!(user_id = ?user.id(), "User signed in");
                Ok((user, token))
            }
            _ => {
                tracing::warn!(username = %command.username, "Sign-in rejected");
                Err(AppError::InvalidCredentials)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::AuditFields;
    use mockall::predicate::eq;

    use crate::acl::MockExternalProfileService;
    use crate::domain::SignUpProfile;
    use crate::repository::{MockRoleRepository, MockUserRepository};
    use crate::service::MockTokenService;

    struct Mocks {
        users: MockUserRepository,
        roles: MockRoleRepository,
        profiles: MockExternalProfileService,
        tokens: MockTokenService,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                users: MockUserRepository::new(),
                roles: MockRoleRepository::new(),
                profiles: MockExternalProfileService::new(),
                tokens: MockTokenService::new(),
            }
        }

        fn seeded_roles(mut self) -> Self {
            self.roles
                .expect_find_by_name()
                .returning(|name| Ok(Some(Role::with_id(name as i64 + 1, name))));
            self
        }

        fn service(self) -> UserCommandServiceImpl {
            UserCommandServiceImpl::new(
                Arc::new(self.users),
                Arc::new(self.roles),
                Arc::new(self.profiles),
                Arc::new(self.tokens),
            )
        }
    }

    fn sign_up(roles: Vec<Roles>, profile: Option<SignUpProfile>) -> SignUpCommand {
        SignUpCommand {
            username: "carla".to_string(),
            password: "secret1".to_string(),
            roles,
            profile,
        }
    }

    fn stored_user(password: &str) -> User {
        User::restore(
            7,
            "carla".to_string(),
            HashedPassword::hash(password).unwrap(),
            vec![Role::with_id(1, Roles::RoleIssuer)],
            None,
            AuditFields::now(),
        )
    }

    #[tokio::test]
    async fn test_sign_up_defaults_to_issuer_role() {
        let mut mocks = Mocks::new().seeded_roles();
        mocks.users.expect_exists_by_username().returning(|_| Ok(false));
        mocks
            .users
            .expect_create()
            .times(1)
            .returning(|user| Ok(user.with_id(1, AuditFields::now())));
        mocks.profiles.expect_create_profile().never();

        let user = mocks.service().handle_sign_up(sign_up(vec![], None)).await.unwrap();

        assert_eq!(user.id(), Some(1));
        assert_eq!(user.role_names(), vec!["ROLE_ISSUER"]);
        assert!(user.verify_password("secret1"));
        assert_eq!(user.profile_id(), None);
    }

    #[tokio::test]
    async fn test_sign_up_uses_requested_roles() {
        let mut mocks = Mocks::new();
        mocks.users.expect_exists_by_username().returning(|_| Ok(false));
        mocks
            .roles
            .expect_find_by_name()
            .with(eq(Roles::RoleInvestor))
            .returning(|name| Ok(Some(Role::with_id(2, name))));
        mocks
            .users
            .expect_create()
            .returning(|user| Ok(user.with_id(2, AuditFields::now())));

        let user = mocks
            .service()
            .handle_sign_up(sign_up(vec![Roles::RoleInvestor], None))
            .await
            .unwrap();

        assert_eq!(user.role_names(), vec!["ROLE_INVESTOR"]);
    }

    #[tokio::test]
    async fn test_sign_up_links_created_profile() {
        let mut mocks = Mocks::new().seeded_roles();
        mocks.users.expect_exists_by_username().returning(|_| Ok(false));
        mocks
            .profiles
            .expect_create_profile()
            .withf(|profile, password| profile.email == "finanzas@acme.pe" && password == "secret1")
            .returning(|_, _| Ok(31));
        mocks
            .users
            .expect_create()
            .withf(|user| user.profile_id() == Some(31))
            .returning(|user| Ok(user.with_id(3, AuditFields::now())));

        let profile = SignUpProfile {
            ruc: "20123456789".to_string(),
            razon_social: "Acme Peru S.A.C.".to_string(),
            email: "finanzas@acme.pe".to_string(),
            nombre_contacto: None,
        };
        let user = mocks
            .service()
            .handle_sign_up(sign_up(vec![], Some(profile)))
            .await
            .unwrap();

        assert_eq!(user.profile_id(), Some(31));
    }

    #[tokio::test]
    async fn test_sign_up_duplicate_username_is_conflict() {
        let mut mocks = Mocks::new();
        mocks.users.expect_exists_by_username().returning(|_| Ok(true));
        mocks.users.expect_create().never();

        let result = mocks.service().handle_sign_up(sign_up(vec![], None)).await;
        assert!(matches!(result, Err(AppError::Conflict(entity)) if entity == "Username"));
    }

    #[tokio::test]
    async fn test_sign_up_unseeded_role_is_internal() {
        let mut mocks = Mocks::new();
        mocks.users.expect_exists_by_username().returning(|_| Ok(false));
        mocks.roles.expect_find_by_name().returning(|_| Ok(None));
        mocks.users.expect_create().never();

        let result = mocks.service().handle_sign_up(sign_up(vec![], None)).await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_sign_up_profile_conflict_stops_user_creation() {
        let mut mocks = Mocks::new().seeded_roles();
        mocks.users.expect_exists_by_username().returning(|_| Ok(false));
        mocks
            .profiles
            .expect_create_profile()
            .returning(|_, _| Err(AppError::conflict("Profile")));
        mocks.users.expect_create().never();

        let profile = SignUpProfile {
            ruc: "20123456789".to_string(),
            razon_social: "Acme".to_string(),
            email: "finanzas@acme.pe".to_string(),
            nombre_contacto: None,
        };
        let result = mocks
            .service()
            .handle_sign_up(sign_up(vec![], Some(profile)))
            .await;
        assert!(matches!(result, Err(AppError::Conflict(entity)) if entity == "Profile"));
    }

    #[tokio::test]
    async fn test_sign_in_success_returns_token() {
        let mut mocks = Mocks::new();
        mocks
            .users
            .expect_find_by_username()
            .withf(|username| username == "carla")
            .returning(|_| Ok(Some(stored_user("secret1"))));
        mocks
            .tokens
            .expect_generate_token()
            .returning(|_| Ok("signed.jwt.token".to_string()));

        let (user, token) = mocks
            .service()
            .handle_sign_in(SignInCommand {
                username: " carla ".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(user.id(), Some(7));
        assert_eq!(token, "signed.jwt.token");
    }

    #[tokio::test]
    async fn test_sign_in_wrong_password_is_invalid_credentials() {
        let mut mocks = Mocks::new();
        mocks
            .users
            .expect_find_by_username()
            .returning(|_| Ok(Some(stored_user("secret1"))));
        mocks.tokens.expect_generate_token().never();

        let result = mocks
            .service()
            .handle_sign_in(SignInCommand {
                username: "carla".to_string(),
                password: "wrong".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_sign_in_unknown_user_is_invalid_credentials() {
        let mut mocks = Mocks::new();
        mocks.users.expect_find_by_username().returning(|_| Ok(None));
        mocks.tokens.expect_generate_token().never();

        let result = mocks
            .service()
            .handle_sign_in(SignInCommand {
                username: "ghost".to_string(),
                password: "secret1".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_failed_user_insert_removes_created_profile() {
        let mut mocks = Mocks::new().seeded_roles();
        mocks.users.expect_exists_by_username().returning(|_| Ok(false));
        mocks
            .profiles
            .expect_create_profile()
            .returning(|_, _| Ok(31));
        mocks
            .users
            .expect_create()
            .returning(|_| Err(AppError::conflict("Username")));
        mocks
            .profiles
            .expect_delete_profile()
            .with(eq(31))
            .times(1)
            .returning(|_| Ok(()));

        let profile = SignUpProfile {
            ruc: "20123456789".to_string(),
            razon_social: "Acme".to_string(),
            email: "finanzas@acme.pe".to_string(),
            nombre_contacto: None,
        };
        let result = mocks
            .service()
            .handle_sign_up(sign_up(vec![], Some(profile)))
            .await;
        assert!(matches!(result, Err(AppError::Conflict(entity)) if entity == "Username"));
    }

    #[tokio::test]
    async fn test_failed_user_insert_without_profile_deletes_nothing() {
        let mut mocks = Mocks::new().seeded_roles();
        mocks.users.expect_exists_by_username().returning(|_| Ok(false));
        mocks
            .users
            .expect_create()
            .returning(|_| Err(AppError::internal("connection reset")));
        mocks.profiles.expect_delete_profile().never();

        let result = mocks.service().handle_sign_up(sign_up(vec![], None)).await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
