//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence. Each store has
//! a SeaORM implementation and an in-memory one.

mod coffee_repository;
mod credential_repository;
pub(crate) mod entities;
mod memory;

use common::AppError;
use sea_orm::{DbErr, SqlErr};

pub use coffee_repository::{CoffeeRepository, CoffeeStore};
pub use credential_repository::{CredentialRepository, CredentialStore};
pub use memory::{InMemoryCoffeeStore, InMemoryCredentialStore};

// Export mocks for tests
#[cfg(any(test, feature = "test-utils"))]
pub use coffee_repository::MockCoffeeRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use credential_repository::MockCredentialRepository;

/// Map a violation of `constraint` to `Conflict`. Any other store fault,
/// including a violation of a different unique constraint, stays a database
/// error.
pub(crate) fn unique_violation_as_conflict<F>(
    err: DbErr,
    constraint: &str,
    label: F,
) -> AppError
where
    F: FnOnce() -> String,
{
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message))
            if names_constraint(&message, constraint) =>
        {
            AppError::Conflict(label())
        }
        _ => AppError::Database(err),
    }
}

// Postgres quotes the constraint name in the violation message.
fn names_constraint(message: &str, constraint: &str) -> bool {
    message.contains(&format!("\"{}\"", constraint))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_constraint_matches_quoted_name_only() {
        let name_violation = "error returned from database: duplicate key value violates \
                              unique constraint \"coffees_name_key\"";
        let pkey_violation = "error returned from database: duplicate key value violates \
                              unique constraint \"coffees_pkey\"";

        assert!(names_constraint(name_violation, "coffees_name_key"));
        assert!(!names_constraint(pkey_violation, "coffees_name_key"));
        assert!(!names_constraint(name_violation, "coffees_name"));
    }

    #[test]
    fn test_other_faults_stay_database_errors() {
        let err = unique_violation_as_conflict(
            DbErr::Custom("connection reset".to_string()),
            "coffees_name_key",
            || "Coffee 'Latte'".to_string(),
        );
        assert!(matches!(err, AppError::Database(_)));
    }
}
