//! User repository implementation.
//!
//! Roles are loaded explicitly through the `user_roles` join table; the
//! profile link is a plain id column.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::entities::{
    role::Entity as RoleEntity,
    user::{self, ActiveModel, Entity as UserEntity},
    user_role::{self, Entity as UserRoleEntity},
};
use super::role_repository;
use crate::domain::{Role, User};
use common::{AppError, AppResult};
use domain::{AuditFields, HashedPassword};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    async fn exists_by_username(&self, username: &str) -> AppResult<bool>;

    /// All users with their roles, by id
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Insert the user and its role memberships in one transaction.
    ///
    /// Every role must already carry its stored id. A taken username
    /// yields `AppError::Conflict`.
    async fn create(&self, user: User) -> AppResult<User>;
}

pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn load_roles<C: ConnectionTrait>(
        db: &C,
        user_ids: Vec<i64>,
    ) -> AppResult<HashMap<i64, Vec<Role>>> {
        let rows = UserRoleEntity::find()
            .filter(user_role::Column::UserId.is_in(user_ids))
            .find_also_related(RoleEntity)
            .all(db)
            .await
            .map_err(AppError::from)?;

        let mut by_user: HashMap<i64, Vec<Role>> = HashMap::new();
        for (link, role) in rows {
            if let Some(role) = role {
                by_user
                    .entry(link.user_id)
                    .or_default()
                    .push(role_repository::to_domain(role)?);
            }
        }
        Ok(by_user)
    }

    async fn attach_roles(&self, model: Option<user::Model>) -> AppResult<Option<User>> {
        let Some(model) = model else {
            return Ok(None);
        };
        let mut roles = Self::load_roles(&self.db, vec![model.id]).await?;
        let user_roles = roles.remove(&model.id).unwrap_or_default();
        Ok(Some(to_domain(model, user_roles)))
    }
}

fn to_domain(model: user::Model, roles: Vec<Role>) -> User {
    User::restore(
        model.id,
        model.username,
        HashedPassword::from_hash(model.password_hash),
        roles,
        model.profile_id,
        AuditFields::from_parts(model.created_at, model.updated_at),
    )
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let model = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        self.attach_roles(model).await
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let model = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        self.attach_roles(model).await
    }

    async fn exists_by_username(&self, username: &str) -> AppResult<bool> {
        let count = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        if models.is_empty() {
            return Ok(Vec::new());
        }

        let ids = models.iter().map(|m| m.id).collect();
        let mut roles = Self::load_roles(&self.db, ids).await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let user_roles = roles.remove(&m.id).unwrap_or_default();
                to_domain(m, user_roles)
            })
            .collect())
    }

    async fn create(&self, user: User) -> AppResult<User> {
        let role_ids = user
            .roles()
            .iter()
            .map(|role| {
                role.id().ok_or_else(|| {
                    AppError::internal(format!("Role {} has not been seeded", role.name()))
                })
            })
            .collect::<AppResult<Vec<i64>>>()?;

        let txn = self.db.begin().await.map_err(AppError::from)?;

        let audit = AuditFields::now();
        let active_model = ActiveModel {
            id: NotSet,
            username: Set(user.username().to_string()),
            password_hash: Set(user.password().as_str().to_string()),
            profile_id: Set(user.profile_id()),
            created_at: Set(audit.created_at),
            updated_at: Set(audit.updated_at),
        };

        let model = active_model
            .insert(&txn)
            .await
            .map_err(|e| AppError::from_write(e, "Username"))?;

        if !role_ids.is_empty() {
            let links = role_ids.into_iter().map(|role_id| user_role::ActiveModel {
                user_id: Set(model.id),
                role_id: Set(role_id),
            });
            UserRoleEntity::insert_many(links)
                .exec_without_returning(&txn)
                .await
                .map_err(AppError::from)?;
        }

        txn.commit().await.map_err(AppError::from)?;

        Ok(user.with_id(
            model.id,
            AuditFields::from_parts(model.created_at, model.updated_at),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use crate::domain::Roles;
    use crate::repository::entities::role;

    fn user_model(id: i64, username: &str) -> user::Model {
        let now = Utc::now();
        user::Model {
            id,
            username: username.to_string(),
            password_hash: "$argon2id$stored".to_string(),
            profile_id: Some(5),
            created_at: now,
            updated_at: now,
        }
    }

    fn link(user_id: i64, role_id: i64, name: &str) -> (user_role::Model, role::Model) {
        (
            user_role::Model { user_id, role_id },
            role::Model {
                id: role_id,
                name: name.to_string(),
            },
        )
    }

    #[tokio::test]
    async fn test_find_by_username_loads_roles() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_model(1, "carla")]])
            .append_query_results([vec![
                link(1, 1, "ROLE_ISSUER"),
                link(1, 3, "ROLE_ADMIN"),
            ]])
            .into_connection();
        let store = UserStore::new(db);

        let user = store.find_by_username("carla").await.unwrap().unwrap();
        assert_eq!(user.id(), Some(1));
        assert_eq!(user.profile_id(), Some(5));
        assert_eq!(user.role_names(), vec!["ROLE_ISSUER", "ROLE_ADMIN"]);
    }

    #[tokio::test]
    async fn test_find_by_id_missing_skips_role_query() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()])
            .into_connection();
        let store = UserStore::new(db);

        assert!(store.find_by_id(8).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_inserts_user_and_links() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_model(11, "carla")]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let store = UserStore::new(db);

        let user = User::with_roles(
            "carla",
            HashedPassword::from_hash("$argon2id$stored"),
            Some(vec![Role::with_id(2, Roles::RoleInvestor)]),
        )
        .unwrap();

        let created = store.create(user).await.unwrap();
        assert_eq!(created.id(), Some(11));
        assert!(created.has_role(Roles::RoleInvestor));
    }

    #[tokio::test]
    async fn test_create_rejects_unseeded_role() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let store = UserStore::new(db);

        let user = User::with_roles(
            "carla",
            HashedPassword::from_hash("$argon2id$stored"),
            Some(vec![Role::new(Roles::RoleAdmin)]),
        )
        .unwrap();

        assert!(matches!(store.create(user).await, Err(AppError::Internal(_))));
    }
}
