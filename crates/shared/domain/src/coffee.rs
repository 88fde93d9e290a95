//! Coffee catalog entity and pricing rules.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_PRICE_CENTS, MIN_COFFEE_NAME_LENGTH, PRICE_SCALE};
use crate::error::{DomainError, DomainResult};

/// Largest price magnitude a store can hold.
pub fn max_price() -> Decimal {
    Decimal::new(MAX_PRICE_CENTS, PRICE_SCALE)
}

/// Round a price to cents, half away from zero, and reject magnitudes above
/// [`max_price`].
pub fn normalize_price(price: Decimal) -> DomainResult<Decimal> {
    let price = price.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    if price.abs() > max_price() {
        return Err(DomainError::validation(format!(
            "Price must be between -{max} and {max}",
            max = max_price()
        )));
    }
    Ok(price)
}

/// Price after subtracting `fraction` of it, rounded to cents.
///
/// The fraction is not range-checked: values above one give a negative price
/// and negative values raise it. Only a result that cannot be represented is
/// an error.
pub fn discounted_price(price: Decimal, fraction: Decimal) -> DomainResult<Decimal> {
    let discounted = price
        .checked_mul(fraction)
        .and_then(|cut| price.checked_sub(cut))
        .ok_or_else(|| DomainError::validation("Discounted price is out of range"))?;

    normalize_price(discounted)
}

/// Coffee domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Coffee {
    /// Store-assigned identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i64,
    /// Unique coffee name
    #[cfg_attr(feature = "openapi", schema(example = "Espresso"))]
    pub name: String,
    /// Current price
    #[serde(with = "rust_decimal::serde::float")]
    #[cfg_attr(feature = "openapi", schema(value_type = f64, example = 5.0))]
    pub price: Decimal,
}

impl Coffee {
    /// Create a coffee with an already assigned id
    pub fn new(id: i64, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// Re-price this coffee by subtracting `fraction` of its current price.
    /// Repeated application compounds. On error the price is left as it was.
    pub fn apply_discount(&mut self, fraction: Decimal) -> DomainResult<()> {
        self.price = discounted_price(self.price, fraction)?;
        Ok(())
    }
}

/// Name and price of a coffee that has no id yet, or that replaces one.
#[derive(Debug, Clone, PartialEq)]
pub struct CoffeeDraft {
    pub name: String,
    pub price: Decimal,
}

impl CoffeeDraft {
    /// Build a draft, enforcing a non-empty name and a non-negative price.
    /// The price is rounded to cents.
    pub fn new(name: impl Into<String>, price: Decimal) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().chars().count() < MIN_COFFEE_NAME_LENGTH {
            return Err(DomainError::validation("Coffee name is required"));
        }
        if price.is_sign_negative() && !price.is_zero() {
            return Err(DomainError::validation("Price must not be negative"));
        }
        let price = normalize_price(price)?;
        Ok(Self { name, price })
    }

    /// Attach a store-assigned id
    pub fn with_id(self, id: i64) -> Coffee {
        Coffee {
            id,
            name: self.name,
            price: self.price,
        }
    }
}
