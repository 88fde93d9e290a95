//! Coffee service - catalog rules on top of the coffee store.
//!
//! Names are unique; creating a second coffee with a taken name fails. A
//! discount re-prices the coffee found by name and compounds when repeated.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::config::ENTITY_COFFEE;
use crate::infra::CoffeeRepository;
use common::{AppResult, OptionExt};
use domain::{Coffee, CoffeeDraft, DomainError};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Coffee service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CoffeeService: Send + Sync {
    /// Every stored coffee, ordered by id
    async fn list_all(&self) -> AppResult<Vec<Coffee>>;

    /// Coffee with this id
    async fn find_by_id(&self, id: i64) -> AppResult<Coffee>;

    /// Store a new coffee under an unused name
    async fn create(&self, draft: CoffeeDraft) -> AppResult<Coffee>;

    /// Replace the coffee at `id`, creating it if the id is unused
    async fn update_by_id(&self, id: i64, draft: CoffeeDraft) -> AppResult<Coffee>;

    /// Lower the price of the coffee called `name` by `fraction` of it
    async fn apply_discount(&self, name: &str, fraction: Decimal) -> AppResult<Coffee>;

    /// Remove the coffee at `id`
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of CoffeeService.
pub struct CoffeeManager {
    coffees: Arc<dyn CoffeeRepository>,
}

impl CoffeeManager {
    pub fn new(coffees: Arc<dyn CoffeeRepository>) -> Self {
        Self { coffees }
    }
}

#[async_trait]
impl CoffeeService for CoffeeManager {
    async fn list_all(&self) -> AppResult<Vec<Coffee>> {
        self.coffees.list().await
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Coffee> {
        self.coffees
            .find_by_id(id)
            .await?
            .ok_or_not_found(format!("{} {}", ENTITY_COFFEE, id))
    }

    async fn create(&self, draft: CoffeeDraft) -> AppResult<Coffee> {
        if self.coffees.find_by_name(&draft.name).await?.is_some() {
            return Err(
                DomainError::duplicate_name(format!("{} '{}'", ENTITY_COFFEE, draft.name)).into(),
            );
        }

        let coffee = self.coffees.insert(draft).await?;
        tracing::info!(coffee_id = coffee.id, name = %coffee.name, "Coffee created");
        Ok(coffee)
    }

    async fn update_by_id(&self, id: i64, draft: CoffeeDraft) -> AppResult<Coffee> {
        let coffee = self.coffees.upsert(draft.with_id(id)).await?;
        tracing::info!(coffee_id = coffee.id, "Coffee updated");
        Ok(coffee)
    }

    async fn apply_discount(&self, name: &str, fraction: Decimal) -> AppResult<Coffee> {
        let mut coffee = self
            .coffees
            .find_by_name(name)
            .await?
            .ok_or_not_found(format!("{} '{}'", ENTITY_COFFEE, name))?;

        let before = coffee.price;
        coffee.apply_discount(fraction)?;
        tracing::info!(
            coffee_id = coffee.id,
            %before,
            after = %coffee.price,
            "Discount applied"
        );

        self.coffees.upsert(coffee).await
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        self.coffees.delete(id).await?;
        tracing::info!(coffee_id = id, "Coffee deleted");
        Ok(())
    }
}
