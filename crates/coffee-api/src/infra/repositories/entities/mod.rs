//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod coffee;
pub mod user;
