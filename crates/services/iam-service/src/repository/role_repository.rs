//! Role repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::role::{self, ActiveModel, Entity as RoleEntity};
use crate::domain::{Role, Roles};
use common::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Role repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn find_by_name(&self, name: Roles) -> AppResult<Option<Role>>;

    async fn exists_by_name(&self, name: Roles) -> AppResult<bool>;

    /// All seeded roles, by id
    async fn list(&self) -> AppResult<Vec<Role>>;

    async fn create(&self, name: Roles) -> AppResult<Role>;
}

pub struct RoleStore {
    db: DatabaseConnection,
}

impl RoleStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

pub(crate) fn to_domain(model: role::Model) -> AppResult<Role> {
    let name = model.name.clone();
    Role::try_from(model)
        .map_err(|e| AppError::internal(format!("Stored role {} is invalid: {}", name, e)))
}

#[async_trait]
impl RoleRepository for RoleStore {
    async fn find_by_name(&self, name: Roles) -> AppResult<Option<Role>> {
        let result = RoleEntity::find()
            .filter(role::Column::Name.eq(name.as_str()))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(to_domain).transpose()
    }

    async fn exists_by_name(&self, name: Roles) -> AppResult<bool> {
        let count = RoleEntity::find()
            .filter(role::Column::Name.eq(name.as_str()))
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }

    async fn list(&self) -> AppResult<Vec<Role>> {
        let models = RoleEntity::find()
            .order_by_asc(role::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        models.into_iter().map(to_domain).collect()
    }

    async fn create(&self, name: Roles) -> AppResult<Role> {
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(name.as_str().to_string()),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, "Role"))?;

        to_domain(model)
    }
}
