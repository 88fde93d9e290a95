//! In-memory stores for development and tests.
//!
//! Same contracts as the SeaORM stores, including name uniqueness. Each call
//! takes the lock once; nothing spans calls.

use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use super::coffee_repository::coffee_label;
use super::{CoffeeRepository, CredentialRepository};
use crate::config::{ENTITY_COFFEE, ENTITY_USER};
use common::{AppError, AppResult};
use domain::{Coffee, CoffeeDraft, Credential};

fn read<T>(lock: &RwLock<T>) -> AppResult<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|_| AppError::internal("in-memory store lock poisoned"))
}

fn write<T>(lock: &RwLock<T>) -> AppResult<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|_| AppError::internal("in-memory store lock poisoned"))
}

#[derive(Debug)]
struct CoffeeTable {
    next_id: i64,
    rows: BTreeMap<i64, Coffee>,
}

impl CoffeeTable {
    fn name_taken_by_other(&self, name: &str, id: Option<i64>) -> bool {
        self.rows
            .values()
            .any(|c| c.name == name && Some(c.id) != id)
    }
}

/// Coffee store backed by an ordered map
#[derive(Debug)]
pub struct InMemoryCoffeeStore {
    table: RwLock<CoffeeTable>,
}

impl InMemoryCoffeeStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(CoffeeTable {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryCoffeeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CoffeeRepository for InMemoryCoffeeStore {
    async fn list(&self) -> AppResult<Vec<Coffee>> {
        Ok(read(&self.table)?.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Coffee>> {
        Ok(read(&self.table)?.rows.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Coffee>> {
        Ok(read(&self.table)?
            .rows
            .values()
            .find(|c| c.name == name)
            .cloned())
    }

    async fn insert(&self, draft: CoffeeDraft) -> AppResult<Coffee> {
        let mut table = write(&self.table)?;
        if table.name_taken_by_other(&draft.name, None) {
            return Err(AppError::conflict(coffee_label(&draft.name)));
        }

        let id = table.next_id;
        table.next_id += 1;
        let coffee = draft.with_id(id);
        table.rows.insert(id, coffee.clone());
        Ok(coffee)
    }

    async fn upsert(&self, coffee: Coffee) -> AppResult<Coffee> {
        let mut table = write(&self.table)?;
        if table.name_taken_by_other(&coffee.name, Some(coffee.id)) {
            return Err(AppError::conflict(coffee_label(&coffee.name)));
        }

        if coffee.id >= table.next_id {
            table.next_id = coffee.id + 1;
        }
        table.rows.insert(coffee.id, coffee.clone());
        Ok(coffee)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        match write(&self.table)?.rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(AppError::not_found(format!("{} {}", ENTITY_COFFEE, id))),
        }
    }
}

#[derive(Debug)]
struct CredentialTable {
    next_id: i64,
    by_username: HashMap<String, Credential>,
}

/// Credential store keyed by username
#[derive(Debug)]
pub struct InMemoryCredentialStore {
    table: RwLock<CredentialTable>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(CredentialTable {
                next_id: 1,
                by_username: HashMap::new(),
            }),
        }
    }
}

impl Default for InMemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Credential>> {
        Ok(read(&self.table)?.by_username.get(username).cloned())
    }

    async fn create(&self, username: String, password_hash: String) -> AppResult<Credential> {
        let mut table = write(&self.table)?;
        if table.by_username.contains_key(&username) {
            return Err(AppError::conflict(format!("{} '{}'", ENTITY_USER, username)));
        }

        let credential = Credential {
            id: table.next_id,
            username: username.clone(),
            password_hash,
        };
        table.next_id += 1;
        table.by_username.insert(username, credential.clone());
        Ok(credential)
    }
}
