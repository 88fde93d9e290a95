//! Login handler.

use axum::{extract::State, http::header::AUTHORIZATION, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::services::TokenResponse;
use common::AppResult;
use domain::BEARER_TOKEN_PREFIX;

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "correct-horse")]
    pub password: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Login and get a bearer token
///
/// The token is returned in the `Authorization` response header and in the body.
#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse,
            headers(("Authorization" = String, description = "Bearer <token>"))),
        (status = 400, description = "Malformed body"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<([(axum::http::HeaderName, String); 1], Json<TokenResponse>)> {
    let token = state
        .auth_service
        .login(payload.username, payload.password)
        .await?;

    let header = format!("{} {}", BEARER_TOKEN_PREFIX, token.access_token);
    Ok(([(AUTHORIZATION, header)], Json(token)))
}
