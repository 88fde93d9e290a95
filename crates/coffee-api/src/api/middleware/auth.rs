//! Bearer token authorization gate.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use common::AppError;
use domain::BEARER_TOKEN_PREFIX;

/// Principal established from a verified bearer token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub username: String,
}

/// Establishes the request principal from an `Authorization: Bearer` header.
///
/// Requests without a bearer header pass through with no principal. A bearer
/// token that fails verification is rejected with 401 when the state asks for
/// it, otherwise the request continues anonymously.
pub async fn authorization_gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix(BEARER_TOKEN_PREFIX))
        .map(|token| token.trim().to_string());

    let Some(token) = token else {
        return Ok(next.run(request).await);
    };

    match state.tokens.verify(&token) {
        Ok(username) => {
            tracing::debug!(username = %username, "Request authenticated");
            request.extensions_mut().insert(CurrentUser { username });
        }
        Err(err) if state.reject_invalid_tokens => return Err(err.into()),
        Err(_) => tracing::debug!("Invalid bearer token, continuing anonymously"),
    }

    Ok(next.run(request).await)
}

/// Username of the principal, or `anonymous`
pub fn actor(user: &Option<axum::Extension<CurrentUser>>) -> &str {
    user.as_ref()
        .map(|axum::Extension(u)| u.username.as_str())
        .unwrap_or("anonymous")
}
