//! Application state shared by every handler.

use std::sync::Arc;

use crate::infra::StorageHealth;
use crate::services::{AuthService, CoffeeService, Services, TokenCodec};

/// Application state (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Catalog operations
    pub coffee_service: Arc<dyn CoffeeService>,
    /// Login and sign-up
    pub auth_service: Arc<dyn AuthService>,
    /// Token verification for the authorization gate
    pub tokens: Arc<TokenCodec>,
    /// Answer 401 to an invalid bearer token instead of ignoring it
    pub reject_invalid_tokens: bool,
    /// Backend probe for the health check
    pub storage: StorageHealth,
}

impl AppState {
    pub fn new(services: &Services, reject_invalid_tokens: bool) -> Self {
        Self {
            coffee_service: services.coffees(),
            auth_service: services.auth(),
            tokens: services.tokens(),
            reject_invalid_tokens,
            storage: services.storage().clone(),
        }
    }
}
