//! REST resources (request/response bodies).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Profile creation request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileResource {
    /// Peruvian taxpayer number (11 digits)
    #[validate(length(equal = 11, message = "RUC must have exactly 11 digits"))]
    #[schema(example = "20123456789")]
    pub ruc: String,
    /// Registered company name
    #[validate(length(min = 1, max = 255, message = "Razon social is required (max 255 characters)"))]
    #[schema(example = "Acme Peru S.A.C.")]
    pub razon_social: String,
    /// Contact email, unique per profile
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "finanzas@acme.pe")]
    pub email: String,
    /// Profile password (minimum 6 characters)
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[schema(example = "secret1", min_length = 6)]
    pub password: String,
    /// Contact person
    #[schema(example = "Maria Quispe")]
    pub nombre_contacto: Option<String>,
}

/// Profile representation returned to clients. Never carries the password.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResource {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "20123456789")]
    pub ruc: String,
    #[schema(example = "Acme Peru S.A.C.")]
    pub razon_social: String,
    #[schema(example = "finanzas@acme.pe")]
    pub email: String,
    #[schema(example = "Maria Quispe")]
    pub nombre_contacto: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
