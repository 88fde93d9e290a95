//! Service container - wires stores into services once at startup.

use std::sync::Arc;

use super::{AuthService, Authenticator, CoffeeManager, CoffeeService, TokenCodec};
use crate::infra::{
    CoffeeRepository, CoffeeStore, CredentialRepository, CredentialStore, Database,
    InMemoryCoffeeStore, InMemoryCredentialStore, StorageHealth,
};
use common::{AppResult, JwtConfig};

/// Every application service, shared behind `Arc`.
#[derive(Clone)]
pub struct Services {
    coffee_service: Arc<dyn CoffeeService>,
    auth_service: Arc<dyn AuthService>,
    tokens: Arc<TokenCodec>,
    storage: StorageHealth,
}

impl Services {
    /// Build the services over the given stores
    pub fn new(
        coffees: Arc<dyn CoffeeRepository>,
        credentials: Arc<dyn CredentialRepository>,
        jwt: &JwtConfig,
        storage: StorageHealth,
    ) -> AppResult<Self> {
        let tokens = Arc::new(TokenCodec::new(jwt)?);

        Ok(Self {
            coffee_service: Arc::new(CoffeeManager::new(coffees)),
            auth_service: Arc::new(Authenticator::new(credentials, tokens.clone())),
            tokens,
            storage,
        })
    }

    /// Services backed by the SeaORM stores
    pub fn from_database(db: Database, jwt: &JwtConfig) -> AppResult<Self> {
        let connection = db.get_connection();

        Self::new(
            Arc::new(CoffeeStore::new(connection.clone())),
            Arc::new(CredentialStore::new(connection)),
            jwt,
            StorageHealth::Database(db),
        )
    }

    /// Services backed by process-local stores
    pub fn in_memory(jwt: &JwtConfig) -> AppResult<Self> {
        Self::new(
            Arc::new(InMemoryCoffeeStore::new()),
            Arc::new(InMemoryCredentialStore::new()),
            jwt,
            StorageHealth::Memory,
        )
    }

    pub fn coffees(&self) -> Arc<dyn CoffeeService> {
        self.coffee_service.clone()
    }

    pub fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    pub fn tokens(&self) -> Arc<TokenCodec> {
        self.tokens.clone()
    }

    pub fn storage(&self) -> &StorageHealth {
        &self.storage
    }
}
