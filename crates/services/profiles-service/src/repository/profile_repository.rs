//! Profile repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::entities::profile::{self, ActiveModel, Entity as ProfileEntity};
use crate::domain::{NewProfile, Profile};
use common::{AppError, AppResult};
use domain::AuditFields;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Profile repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find profile by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Profile>>;

    /// Find profile by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Profile>>;

    /// List all profiles, oldest first
    async fn list(&self) -> AppResult<Vec<Profile>>;

    /// Insert a profile unless one already exists for its email.
    ///
    /// The lookup and the insert share one transaction; a duplicate email
    /// yields `AppError::Conflict`.
    async fn create_unique(&self, profile: NewProfile) -> AppResult<Profile>;

    /// Delete a profile by ID; `NotFound` when no row matched.
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of ProfileRepository
pub struct ProfileStore {
    db: DatabaseConnection,
}

impl ProfileStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(model: profile::Model) -> AppResult<Profile> {
    let id = model.id;
    Profile::try_from(model)
        .map_err(|e| AppError::internal(format!("Stored profile {} is invalid: {}", id, e)))
}

#[async_trait]
impl ProfileRepository for ProfileStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Profile>> {
        let result = ProfileEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(to_domain).transpose()
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Profile>> {
        let result = ProfileEntity::find()
            .filter(profile::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(to_domain).transpose()
    }

    async fn list(&self) -> AppResult<Vec<Profile>> {
        let models = ProfileEntity::find()
            .order_by_asc(profile::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        models.into_iter().map(to_domain).collect()
    }

    async fn create_unique(&self, profile: NewProfile) -> AppResult<Profile> {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        let existing = ProfileEntity::find()
            .filter(profile::Column::Email.eq(profile.email.as_str()))
            .one(&txn)
            .await
            .map_err(AppError::from)?;

        if existing.is_some() {
            txn.rollback().await.map_err(AppError::from)?;
            return Err(AppError::conflict("Profile"));
        }

        let audit = AuditFields::now();
        let active_model = ActiveModel {
            id: NotSet,
            ruc: Set(profile.ruc.as_str().to_string()),
            razon_social: Set(profile.razon_social.as_str().to_string()),
            email: Set(profile.email.as_str().to_string()),
            password_hash: Set(profile.password.as_str().to_string()),
            nombre_contacto: Set(profile.nombre_contacto.as_option().map(str::to_string)),
            created_at: Set(audit.created_at),
            updated_at: Set(audit.updated_at),
        };

        let model = active_model
            .insert(&txn)
            .await
            .map_err(|e| AppError::from_write(e, "Profile"))?;

        txn.commit().await.map_err(AppError::from)?;

        Ok(Profile::from_new(
            model.id,
            profile,
            AuditFields::from_parts(model.created_at, model.updated_at),
        ))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = ProfileEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use crate::domain::CreateProfileCommand;

    fn model(id: i64, email: &str) -> profile::Model {
        let now = Utc::now();
        profile::Model {
            id,
            ruc: "20123456789".to_string(),
            razon_social: "Acme Peru S.A.C.".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$stored".to_string(),
            nombre_contacto: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn new_profile(email: &str) -> NewProfile {
        NewProfile::from_command(CreateProfileCommand {
            ruc: "20123456789".to_string(),
            razon_social: "Acme Peru S.A.C.".to_string(),
            email: email.to_string(),
            password: "secret1".to_string(),
            nombre_contacto: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_unique_inserts_when_email_is_free() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<profile::Model>::new()])
            .append_query_results([vec![model(1, "finanzas@acme.pe")]])
            .into_connection();
        let store = ProfileStore::new(db);

        let created = store.create_unique(new_profile("finanzas@acme.pe")).await.unwrap();

        assert_eq!(created.id(), 1);
        assert_eq!(created.email().as_str(), "finanzas@acme.pe");
        assert!(created.verify_password("secret1"));
    }

    #[tokio::test]
    async fn test_create_unique_rejects_existing_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(7, "finanzas@acme.pe")]])
            .into_connection();
        let store = ProfileStore::new(db);

        let result = store.create_unique(new_profile("finanzas@acme.pe")).await;

        assert!(matches!(result, Err(AppError::Conflict(entity)) if entity == "Profile"));
    }

    #[tokio::test]
    async fn test_find_by_email_maps_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(3, "ops@acme.pe")]])
            .into_connection();
        let store = ProfileStore::new(db);

        let found = store.find_by_email("ops@acme.pe").await.unwrap().unwrap();
        assert_eq!(found.id(), 3);
        assert_eq!(found.razon_social().as_str(), "Acme Peru S.A.C.");
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<profile::Model>::new()])
            .into_connection();
        let store = ProfileStore::new(db);

        assert!(store.find_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_row_surfaces_as_internal_error() {
        let mut bad = model(5, "ops@acme.pe");
        bad.ruc = "123".to_string();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![bad]])
            .into_connection();
        let store = ProfileStore::new(db);

        assert!(matches!(store.list().await, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let store = ProfileStore::new(db);

        assert!(store.delete(5).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let store = ProfileStore::new(db);

        assert!(matches!(store.delete(5).await, Err(AppError::NotFound)));
    }
}
