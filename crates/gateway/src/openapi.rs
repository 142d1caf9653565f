//! OpenAPI documentation.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use iam_service::rest::{
    AuthenticatedUserResource, RoleResource, SignInResource, SignUpProfileResource,
    SignUpResource, UserResource,
};
use profiles_service::rest::{CreateProfileResource, ProfileResource};

use crate::handlers::health_handler::{HealthResponse, ServiceHealth, ServiceStatus};

#[derive(OpenApi)]
#[openapi(
    info(title = "BonoYa API", description = "Identity and company profiles"),
    paths(
        crate::handlers::authentication_handler::sign_up,
        crate::handlers::authentication_handler::sign_in,
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::get_user,
        crate::handlers::role_handler::list_roles,
        crate::handlers::profile_handler::create_profile,
        crate::handlers::profile_handler::list_profiles,
        crate::handlers::profile_handler::get_profile,
        crate::handlers::profile_handler::get_profile_by_email,
        crate::handlers::health_handler::health_check,
    ),
    components(
        schemas(
            SignUpResource,
            SignUpProfileResource,
            SignInResource,
            UserResource,
            AuthenticatedUserResource,
            RoleResource,
            CreateProfileResource,
            ProfileResource,
            HealthResponse,
            ServiceStatus,
            ServiceHealth,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Sign-up and sign-in"),
        (name = "Users", description = "User queries"),
        (name = "Roles", description = "Seeded roles"),
        (name = "Profiles", description = "Company profiles"),
        (name = "Health", description = "Liveness"),
    )
)]
pub struct ApiDoc;

/// Security scheme modifier.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
