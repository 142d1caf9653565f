//! Sign-up and sign-in.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};

use common::AppResult;
use iam_service::rest::{
    AuthenticatedUserResource, AuthenticatedUserResourceFromEntityAssembler, SignInResource,
    SignInCommandFromResourceAssembler, SignUpCommandFromResourceAssembler, SignUpResource,
    UserResource, UserResourceFromEntityAssembler,
};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

pub fn authentication_routes() -> Router<AppState> {
    Router::new()
        .route("/sign-up", post(sign_up))
        .route("/sign-in", post(sign_in))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/v1/authentication/sign-up",
    tag = "Authentication",
    request_body = SignUpResource,
    responses(
        (status = 201, description = "User created", body = UserResource),
        (status = 400, description = "Validation error or unknown role"),
        (status = 409, description = "Username or profile email already exists")
    )
)]
pub async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(resource): ValidatedJson<SignUpResource>,
) -> AppResult<(StatusCode, Json<UserResource>)> {
    let command = SignUpCommandFromResourceAssembler::to_command_from_resource(resource)?;
    let user = state.user_commands.handle_sign_up(command).await?;
    Ok((
        StatusCode::CREATED,
        Json(UserResourceFromEntityAssembler::to_resource_from_entity(&user)),
    ))
}

/// Sign in and receive a bearer token
#[utoipa::path(
    post,
    path = "/api/v1/authentication/sign-in",
    tag = "Authentication",
    request_body = SignInResource,
    responses(
        (status = 200, description = "Signed in", body = AuthenticatedUserResource),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn sign_in(
    State(state): State<AppState>,
    ValidatedJson(resource): ValidatedJson<SignInResource>,
) -> AppResult<Json<AuthenticatedUserResource>> {
    let command = SignInCommandFromResourceAssembler::to_command_from_resource(resource);
    let (user, token) = state.user_commands.handle_sign_in(command).await?;
    Ok(Json(
        AuthenticatedUserResourceFromEntityAssembler::to_resource_from_entity(
            &user,
            token,
            state.tokens.expires_in(),
        ),
    ))
}
