//! Profile creation and lookup.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use common::{AppResult, OptionExt};
use profiles_service::domain::{GetAllProfilesQuery, GetProfileByEmailQuery, GetProfileByIdQuery};
use profiles_service::rest::{
    CreateProfileCommandFromResourceAssembler, CreateProfileResource, ProfileResource,
    ProfileResourceFromEntityAssembler,
};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_profiles).post(create_profile))
        .route("/by-email/:email", get(get_profile_by_email))
        .route("/:id", get(get_profile))
}

/// Create a company profile
#[utoipa::path(
    post,
    path = "/api/v1/profiles",
    tag = "Profiles",
    security(("bearer_auth" = [])),
    request_body = CreateProfileResource,
    responses(
        (status = 201, description = "Profile created", body = ProfileResource),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "A profile already exists for this email")
    )
)]
pub async fn create_profile(
    State(state): State<AppState>,
    ValidatedJson(resource): ValidatedJson<CreateProfileResource>,
) -> AppResult<(StatusCode, Json<ProfileResource>)> {
    let command = CreateProfileCommandFromResourceAssembler::to_command_from_resource(resource);
    let profile = state.profile_commands.handle(command).await?;
    Ok((
        StatusCode::CREATED,
        Json(ProfileResourceFromEntityAssembler::to_resource_from_entity(
            &profile,
        )),
    ))
}

/// List all profiles
#[utoipa::path(
    get,
    path = "/api/v1/profiles",
    tag = "Profiles",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All profiles", body = Vec<ProfileResource>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_profiles(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProfileResource>>> {
    let profiles = state.profile_queries.get_all(GetAllProfilesQuery).await?;
    Ok(Json(
        profiles
            .iter()
            .map(ProfileResourceFromEntityAssembler::to_resource_from_entity)
            .collect(),
    ))
}

/// Get profile by ID
#[utoipa::path(
    get,
    path = "/api/v1/profiles/{id}",
    tag = "Profiles",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Profile ID")
    ),
    responses(
        (status = 200, description = "Profile", body = ProfileResource),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Profile not found")
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ProfileResource>> {
    let profile = state
        .profile_queries
        .get_by_id(GetProfileByIdQuery { profile_id: id })
        .await?
        .ok_or_not_found()?;
    Ok(Json(ProfileResourceFromEntityAssembler::to_resource_from_entity(&profile)))
}

/// Get profile by email
#[utoipa::path(
    get,
    path = "/api/v1/profiles/by-email/{email}",
    tag = "Profiles",
    security(("bearer_auth" = [])),
    params(
        ("email" = String, Path, description = "Profile email")
    ),
    responses(
        (status = 200, description = "Profile", body = ProfileResource),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Profile not found")
    )
)]
pub async fn get_profile_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<ProfileResource>> {
    let profile = state
        .profile_queries
        .get_by_email(GetProfileByEmailQuery { email })
        .await?
        .ok_or_not_found()?;
    Ok(Json(ProfileResourceFromEntityAssembler::to_resource_from_entity(&profile)))
}
