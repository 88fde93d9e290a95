//! Domain layer - Catalog entities and credential value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The HTTP service and its stores depend on it; it depends on neither.

pub mod coffee;
pub mod constants;
pub mod credential;
pub mod error;
pub mod password;

pub use coffee::{discounted_price, max_price, normalize_price, Coffee, CoffeeDraft};
pub use constants::*;
pub use credential::{Credential, CredentialResponse};
pub use error::{DomainError, DomainResult};
pub use password::Password;
