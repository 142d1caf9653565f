//! Profile database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{AuditFields, DomainResult, HashedPassword};

use crate::domain::{EmailAddress, NewProfile, NombreContacto, Profile, RazonSocial, Ruc};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub ruc: String,
    pub razon_social: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub nombre_contacto: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Rebuild the aggregate from a stored row.
///
/// Rows are re-validated through the value objects, so a row that no
/// longer satisfies the rules surfaces as an error instead of leaking out.
impl TryFrom<Model> for Profile {
    type Error = domain::DomainError;

    fn try_from(model: Model) -> DomainResult<Self> {
        let new_profile = NewProfile {
            ruc: Ruc::new(&model.ruc)?,
            razon_social: RazonSocial::new(&model.razon_social)?,
            email: EmailAddress::new(&model.email)?,
            password: HashedPassword::from_hash(model.password_hash),
            nombre_contacto: NombreContacto::new(model.nombre_contacto.as_deref())?,
        };

        Ok(Profile::from_new(
            model.id,
            new_profile,
            AuditFields::from_parts(model.created_at, model.updated_at),
        ))
    }
}
