//! Credential repository - username to password hash.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use super::unique_violation_as_conflict;
use crate::config::ENTITY_USER;
use common::AppResult;
use domain::Credential;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Postgres' default name for the unique constraint on `users.username`
const USERNAME_CONSTRAINT: &str = "users_username_key";

/// Credential repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Find credential by username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Credential>>;

    /// Store a new credential; `Conflict` if the username is taken
    async fn create(&self, username: String, password_hash: String) -> AppResult<Credential>;
}

/// SeaORM-backed implementation of CredentialRepository
pub struct CredentialStore {
    db: DatabaseConnection,
}

impl CredentialStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CredentialRepository for CredentialStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Credential>> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?;

        Ok(result.map(Credential::from))
    }

    async fn create(&self, username: String, password_hash: String) -> AppResult<Credential> {
        let label = format!("{} '{}'", ENTITY_USER, username);
        let active_model = ActiveModel {
            id: NotSet,
            username: Set(username),
            password_hash: Set(password_hash),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| unique_violation_as_conflict(e, USERNAME_CONSTRAINT, || label))?;

        Ok(Credential::from(model))
    }
}
