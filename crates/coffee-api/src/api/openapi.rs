//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, coffee_handler, health_handler, user_handler};
use crate::services::TokenResponse;
use domain::{Coffee, CredentialResponse};

/// OpenAPI documentation for the coffee catalog
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Coffee API",
        version = "0.1.0",
        description = "Coffee catalog with bearer-token login",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        coffee_handler::list_coffees,
        coffee_handler::get_coffee,
        coffee_handler::create_coffee,
        coffee_handler::update_coffee,
        coffee_handler::discount_coffee,
        coffee_handler::delete_coffee,
        auth_handler::login,
        user_handler::sign_up,
        health_handler::health,
    ),
    components(
        schemas(
            Coffee,
            CredentialResponse,
            TokenResponse,
            coffee_handler::CoffeeRequest,
            coffee_handler::DiscountRequest,
            auth_handler::LoginRequest,
            user_handler::SignUpRequest,
            health_handler::HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Coffees", description = "Catalog operations"),
        (name = "Authentication", description = "Token issuance"),
        (name = "Users", description = "Account sign-up"),
        (name = "Health", description = "Liveness and storage probe")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
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
                        .description(Some("Token from the Authorization header of /login"))
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in ["/coffees", "/coffees/{id}", "/login", "/users/sign-up", "/health"] {
            assert!(paths.contains(&expected), "missing {}", expected);
        }
    }
}
