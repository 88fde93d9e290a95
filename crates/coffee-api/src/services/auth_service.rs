//! Authentication service - login and account sign-up.
//!
//! Password hashing lives in the domain `Password` value object; token
//! signing lives in `TokenCodec`. This service only decides who gets a token.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::TokenCodec;
use crate::infra::CredentialRepository;
use common::{AppError, AppResult};
use domain::{CredentialResponse, DomainError, Password, MIN_USERNAME_LENGTH, TOKEN_TYPE_BEARER};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Token response returned after successful authentication
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token lifetime in seconds
    #[schema(example = 864000)]
    pub expires_in: i64,
}

/// Authentication service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check the credentials and issue a token for the username
    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse>;

    /// Store a new credential with a hashed password
    async fn sign_up(&self, username: String, password: String) -> AppResult<CredentialResponse>;
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    credentials: Arc<dyn CredentialRepository>,
    tokens: Arc<TokenCodec>,
}

impl Authenticator {
    pub fn new(credentials: Arc<dyn CredentialRepository>, tokens: Arc<TokenCodec>) -> Self {
        Self {
            credentials,
            tokens,
        }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse> {
        let found = self.credentials.find_by_username(&username).await?;

        // Unknown usernames still pay for one hash verification.
        let stored = match &found {
            Some(credential) => Password::from_hash(credential.password_hash.as_str()),
            None => Password::dummy(),
        };
        let password_valid = stored.verify(&password);

        let credential = match found {
            Some(credential) if password_valid => credential,
            _ => {
                tracing::info!(username = %username, "Login rejected");
                return Err(DomainError::InvalidCredentials.into());
            }
        };

        let access_token = self.tokens.issue(&credential.username)?;
        tracing::info!(username = %credential.username, "Token issued");

        Ok(TokenResponse {
            access_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.tokens.ttl_seconds(),
        })
    }

    async fn sign_up(&self, username: String, password: String) -> AppResult<CredentialResponse> {
        let username = username.trim().to_string();
        if username.chars().count() < MIN_USERNAME_LENGTH {
            return Err(AppError::validation("Username is required"));
        }

        let password_hash = Password::new(&password)?.into_string();
        let credential = self.credentials.create(username, password_hash).await?;
        tracing::info!(user_id = credential.id, username = %credential.username, "User signed up");

        Ok(credential.into())
    }
}
