//! REST resources (request/response bodies).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Sign-up request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResource {
    #[validate(length(min = 1, max = 50, message = "Username must be 1-50 characters"))]
    #[schema(example = "carla")]
    pub username: String,
    #[validate(length(min = 1, max = 120, message = "Password must be 1-120 characters"))]
    #[schema(example = "secret1")]
    pub password: String,
    /// Role tags; empty or absent means ROLE_ISSUER
    #[serde(default)]
    #[schema(example = json!(["ROLE_ISSUER"]))]
    pub roles: Vec<String>,
    /// Company profile created and linked with the user
    #[validate(nested)]
    pub profile: Option<SignUpProfileResource>,
}

/// Company data attached to a sign-up. The profile shares the user's password.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignUpProfileResource {
    #[validate(length(equal = 11, message = "RUC must have exactly 11 digits"))]
    #[schema(example = "20123456789")]
    pub ruc: String,
    #[validate(length(min = 1, max = 255, message = "Razon social is required (max 255 characters)"))]
    #[schema(example = "Acme Peru S.A.C.")]
    pub razon_social: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "finanzas@acme.pe")]
    pub email: String,
    #[schema(example = "Maria Quispe")]
    pub nombre_contacto: Option<String>,
}

/// Sign-in request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignInResource {
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "carla")]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "secret1")]
    pub password: String,
}

/// User representation. Never carries the password.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResource {
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[schema(example = "carla")]
    pub username: String,
    #[schema(example = json!(["ROLE_ISSUER"]))]
    pub roles: Vec<String>,
    #[schema(example = 1)]
    pub profile_id: Option<i64>,
}

/// Sign-in response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUserResource {
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[schema(example = "carla")]
    pub username: String,
    pub roles: Vec<String>,
    pub token: String,
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token lifetime in seconds
    #[schema(example = 604800)]
    pub expires_in: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoleResource {
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[schema(example = "ROLE_ISSUER")]
    pub name: String,
}
