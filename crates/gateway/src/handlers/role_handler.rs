//! Role listing.

use axum::{extract::State, response::Json, routing::get, Router};

use common::AppResult;
use iam_service::domain::GetAllRolesQuery;
use iam_service::rest::{RoleResource, RoleResourceFromEntityAssembler};

use crate::state::AppState;

pub fn role_routes() -> Router<AppState> {
    Router::new().route("/", get(list_roles))
}

/// List the seeded roles
#[utoipa::path(
    get,
    path = "/api/v1/roles",
    tag = "Roles",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All roles", body = Vec<RoleResource>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_roles(State(state): State<AppState>) -> AppResult<Json<Vec<RoleResource>>> {
    let roles = state.role_queries.get_all(GetAllRolesQuery).await?;
    Ok(Json(
        roles
            .iter()
            .map(RoleResourceFromEntityAssembler::to_resource_from_entity)
            .collect(),
    ))
}
