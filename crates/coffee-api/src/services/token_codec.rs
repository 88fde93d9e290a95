//! Token codec - signs and verifies bearer tokens.
//!
//! Tokens are HS256 JWTs carrying only the subject and the issue/expiry
//! instants. Verification needs no store round trip.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use common::{AppError, AppResult, JwtConfig};
use domain::{DomainError, DomainResult};

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies tokens with one symmetric key and a fixed lifetime.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("key", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TokenCodec {
    /// Build a codec from the signing secret and lifetime.
    ///
    /// # Errors
    /// Fails if the lifetime is not a positive number of hours that fits a
    /// `Duration`.
    pub fn new(config: &JwtConfig) -> AppResult<Self> {
        let ttl = Duration::try_hours(config.expiration_hours)
            .filter(|ttl| *ttl > Duration::zero())
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Token lifetime of {} hours is out of range",
                    config.expiration_hours
                ))
            })?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.secret_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret_bytes()),
            validation,
            ttl,
        })
    }

    /// Sign a token for `subject`, valid from now for the configured lifetime.
    pub fn issue(&self, subject: &str) -> AppResult<String> {
        self.issue_at(subject, Utc::now())
    }

    /// Sign a token as if issued at `issued_at`.
    pub fn issue_at(&self, subject: &str, issued_at: DateTime<Utc>) -> AppResult<String> {
        let claims = Claims {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?)
    }

    /// Check signature, structure and expiry, returning the subject.
    pub fn verify(&self, token: &str) -> DomainResult<String> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims.sub)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token rejected");
                DomainError::InvalidToken
            })
    }

    /// Token lifetime in seconds
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl.num_seconds()
    }
}
