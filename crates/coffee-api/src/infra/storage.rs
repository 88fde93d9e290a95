//! Which backend the running service stores its data in.

use sea_orm::DbErr;

use super::Database;
use crate::config::StorageKind;

/// Handle used by the health check to probe the active backend.
#[derive(Clone)]
pub enum StorageHealth {
    Memory,
    Database(Database),
}

impl StorageHealth {
    pub fn kind(&self) -> StorageKind {
        match self {
            StorageHealth::Memory => StorageKind::Memory,
            StorageHealth::Database(_) => StorageKind::Database,
        }
    }

    /// Probe the backend. The in-memory backend is always reachable.
    pub async fn check(&self) -> Result<(), DbErr> {
        match self {
            StorageHealth::Memory => Ok(()),
            StorageHealth::Database(db) => db.ping().await,
        }
    }
}
