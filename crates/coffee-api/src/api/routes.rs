//! Application route configuration.

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{auth_routes, coffee_routes, health_routes, user_routes};
use super::middleware::authorization_gate;
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured.
///
/// Every request passes the trace layer, then the authorization gate.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(coffee_routes())
        .merge(auth_routes())
        .nest("/users", user_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            authorization_gate,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
