//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and the stores to fulfill the catalog
//! and login use cases. They depend on the repository traits, never on a
//! concrete backend.

mod auth_service;
mod coffee_service;
pub mod container;
mod token_codec;

pub use container::Services;

pub use auth_service::{AuthService, Authenticator, TokenResponse};
pub use coffee_service::{CoffeeManager, CoffeeService};
pub use token_codec::{Claims, TokenCodec};

#[cfg(any(test, feature = "test-utils"))]
pub use auth_service::MockAuthService;
#[cfg(any(test, feature = "test-utils"))]
pub use coffee_service::MockCoffeeService;
