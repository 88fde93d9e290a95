//! Account sign-up handler.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use common::AppResult;
use domain::CredentialResponse;

/// Sign-up request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SignUpRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "alice")]
    pub username: String,
    /// Password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "correct-horse", min_length = 8)]
    pub password: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/sign-up", post(sign_up))
}

/// Register a login
#[utoipa::path(
    post,
    path = "/users/sign-up",
    tag = "Users",
    request_body = SignUpRequest,
    responses(
        (status = 201, description = "User created", body = CredentialResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username already taken")
    )
)]
pub async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SignUpRequest>,
) -> AppResult<(StatusCode, Json<CredentialResponse>)> {
    let created = state
        .auth_service
        .sign_up(payload.username, payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}
