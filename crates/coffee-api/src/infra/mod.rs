//! Infrastructure layer - persistence behind the repository traits
//!
//! - Database connection pool and migrations
//! - SeaORM and in-memory repositories
//! - Backend health probe

pub mod db;
pub mod repositories;
mod storage;

pub use db::{Database, Migrator};
pub use repositories::{
    CoffeeRepository, CoffeeStore, CredentialRepository, CredentialStore, InMemoryCoffeeStore,
    InMemoryCredentialStore,
};
pub use storage::StorageHealth;

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockCoffeeRepository, MockCredentialRepository};
