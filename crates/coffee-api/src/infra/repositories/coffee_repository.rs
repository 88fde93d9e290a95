//! Coffee repository - the product store.

use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, NotSet, QueryFilter, QueryOrder, Set, Statement,
};

use super::entities::coffee::{self, ActiveModel, Entity as CoffeeEntity};
use super::unique_violation_as_conflict;
use crate::config::ENTITY_COFFEE;
use common::{AppError, AppResult};
use domain::{Coffee, CoffeeDraft};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Postgres' default name for the unique constraint on `coffees.name`
const NAME_CONSTRAINT: &str = "coffees_name_key";

/// Moves the id sequence past ids written explicitly by `upsert`.
const SYNC_ID_SEQUENCE: &str =
    "SELECT setval(pg_get_serial_sequence('coffees', 'id'), MAX(id)) FROM coffees";

/// Coffee repository trait for dependency injection.
///
/// Names are unique across stored coffees; every write that would break that
/// fails with `AppError::Conflict`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CoffeeRepository: Send + Sync {
    /// All coffees, ordered by id
    async fn list(&self) -> AppResult<Vec<Coffee>>;

    /// Find coffee by primary key
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Coffee>>;

    /// Find coffee by exact (case-sensitive) name
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Coffee>>;

    /// Store a new coffee; the store assigns the id
    async fn insert(&self, draft: CoffeeDraft) -> AppResult<Coffee>;

    /// Write the coffee at its id, inserting it if the id is unused
    async fn upsert(&self, coffee: Coffee) -> AppResult<Coffee>;

    /// Remove a coffee; `NotFound` if nothing was removed
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// SeaORM-backed implementation of CoffeeRepository
pub struct CoffeeStore {
    db: DatabaseConnection,
}

impl CoffeeStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn sync_id_sequence(&self) -> AppResult<()> {
        let backend = self.db.get_database_backend();
        self.db
            .execute(Statement::from_string(backend, SYNC_ID_SEQUENCE))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl CoffeeRepository for CoffeeStore {
    async fn list(&self) -> AppResult<Vec<Coffee>> {
        let models = CoffeeEntity::find()
            .order_by_asc(coffee::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Coffee::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Coffee>> {
        let result = CoffeeEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Coffee::from))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Coffee>> {
        let result = CoffeeEntity::find()
            .filter(coffee::Column::Name.eq(name))
            .one(&self.db)
            .await?;

        Ok(result.map(Coffee::from))
    }

    async fn insert(&self, draft: CoffeeDraft) -> AppResult<Coffee> {
        let name = draft.name.clone();
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(draft.name),
            price: Set(draft.price),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| {
                unique_violation_as_conflict(e, NAME_CONSTRAINT, || coffee_label(&name))
            })?;

        Ok(Coffee::from(model))
    }

    async fn upsert(&self, coffee: Coffee) -> AppResult<Coffee> {
        let name = coffee.name.clone();
        let active_model = ActiveModel {
            id: Set(coffee.id),
            name: Set(coffee.name),
            price: Set(coffee.price),
        };

        let model = CoffeeEntity::insert(active_model)
            .on_conflict(
                OnConflict::column(coffee::Column::Id)
                    .update_columns([coffee::Column::Name, coffee::Column::Price])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                unique_violation_as_conflict(e, NAME_CONSTRAINT, || coffee_label(&name))
            })?;

        self.sync_id_sequence().await?;
        Ok(Coffee::from(model))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = CoffeeEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(format!("{} {}", ENTITY_COFFEE, id)));
        }

        Ok(())
    }
}

pub(crate) fn coffee_label(name: &str) -> String {
    format!("{} '{}'", ENTITY_COFFEE, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_sync_targets_coffee_ids() {
        assert!(SYNC_ID_SEQUENCE.contains("pg_get_serial_sequence('coffees', 'id')"));
        assert!(SYNC_ID_SEQUENCE.contains("MAX(id)"));
    }
}
