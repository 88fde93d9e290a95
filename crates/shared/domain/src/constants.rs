//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum username length requirement
pub const MIN_USERNAME_LENGTH: usize = 1;

/// Minimum coffee name length requirement
pub const MIN_COFFEE_NAME_LENGTH: usize = 1;

// =============================================================================
// Pricing
// =============================================================================

/// Decimal places kept on every price
pub const PRICE_SCALE: u32 = 2;

/// Largest price magnitude in cents; fits a `decimal(12, 2)` column
pub const MAX_PRICE_CENTS: i64 = 999_999_999_999;

// =============================================================================
// Authentication
// =============================================================================

/// Default token lifetime in hours (10 days)
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 240;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Longest configurable token lifetime in hours (10 years)
pub const MAX_JWT_EXPIRATION_HOURS: i64 = 24 * 365 * 10;

/// Authorization scheme prefix. Matched literally, without a trailing space.
pub const BEARER_TOKEN_PREFIX: &str = "Bearer";

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";
