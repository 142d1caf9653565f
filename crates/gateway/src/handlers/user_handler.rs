//! User queries.

use axum::{
    extract::{Extension, Path, State},
    response::Json,
    routing::get,
    Router,
};

use common::{AppResult, OptionExt};
use iam_service::domain::{GetAllUsersQuery, GetUserByIdQuery, Roles};
use iam_service::rest::{UserResource, UserResourceFromEntityAssembler};

use crate::middleware::{require_role, CurrentUser};
use crate::state::AppState;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/:id", get(get_user))
}

/// List all users (admin only)
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of all users", body = Vec<UserResource>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn list_users(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UserResource>>> {
    require_role(&current_user, Roles::RoleAdmin)?;
    let users = state.user_queries.get_all(GetAllUsersQuery).await?;
    Ok(Json(
        users
            .iter()
            .map(UserResourceFromEntityAssembler::to_resource_from_entity)
            .collect(),
    ))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User", body = UserResource),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<UserResource>> {
    let user = state
        .user_queries
        .get_by_id(GetUserByIdQuery { user_id: id })
        .await?
        .ok_or_not_found()?;
    Ok(Json(UserResourceFromEntityAssembler::to_resource_from_entity(
        &user,
    )))
}
