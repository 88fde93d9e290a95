//! Application settings loaded from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use common::{AppError, AppResult, DatabaseConfig, JwtConfig, ServiceConfig};
use domain::{DEFAULT_JWT_EXPIRATION_HOURS, MAX_JWT_EXPIRATION_HOURS, MIN_JWT_SECRET_LENGTH};

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_DB_MAX_CONNECTIONS, DEFAULT_DB_MIN_CONNECTIONS,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, SERVICE_NAME,
};

/// Where coffees and credentials are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StorageKind {
    /// PostgreSQL through SeaORM
    Database,
    /// Process-local maps, lost on restart
    Memory,
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageKind::Database => write!(f, "database"),
            StorageKind::Memory => write!(f, "memory"),
        }
    }
}

impl FromStr for StorageKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "database" | "postgres" | "db" => Ok(StorageKind::Database),
            "memory" | "mem" => Ok(StorageKind::Memory),
            other => Err(AppError::validation(format!("Unknown storage kind: {}", other))),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServiceConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub storage: StorageKind,
}

impl Config {
    /// Load configuration from the process environment (and `.env`, if present).
    ///
    /// # Errors
    /// Fails if `JWT_SECRET` is missing or shorter than `MIN_JWT_SECRET_LENGTH`,
    /// or if `JWT_EXPIRATION_HOURS` is not a whole number of hours between one
    /// and `MAX_JWT_EXPIRATION_HOURS`.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET").ok_or_else(|| {
            AppError::validation("JWT_SECRET environment variable must be set")
        })?;

        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::validation(format!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        let expiration_hours = match lookup("JWT_EXPIRATION_HOURS") {
            Some(value) => token_lifetime_hours(&value)?,
            None => DEFAULT_JWT_EXPIRATION_HOURS,
        };

        let storage = match lookup("STORAGE") {
            Some(value) => value.parse()?,
            None => StorageKind::Database,
        };

        Ok(Self {
            server: ServiceConfig {
                service_name: SERVICE_NAME.to_string(),
                host: lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
                port: parsed(&lookup, "SERVER_PORT").unwrap_or(DEFAULT_SERVER_PORT),
            },
            database: database_from_lookup(&lookup),
            jwt: JwtConfig {
                secret,
                expiration_hours,
                reject_invalid_tokens: lookup("AUTH_REJECT_INVALID_TOKENS")
                    .and_then(|v| parse_flag(&v))
                    .unwrap_or(true),
            },
            storage,
        })
    }

    /// Database settings alone, for commands that never issue tokens.
    pub fn database_from_env() -> DatabaseConfig {
        dotenvy::dotenv().ok();
        database_from_lookup(&|key: &str| env::var(key).ok())
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        self.server.addr()
    }
}

fn database_from_lookup<F>(lookup: &F) -> DatabaseConfig
where
    F: Fn(&str) -> Option<String>,
{
    DatabaseConfig {
        url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
        max_connections: parsed(lookup, "DATABASE_MAX_CONNECTIONS")
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS),
        min_connections: parsed(lookup, "DATABASE_MIN_CONNECTIONS")
            .unwrap_or(DEFAULT_DB_MIN_CONNECTIONS),
    }
}

fn parsed<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key).and_then(|v| v.trim().parse().ok())
}

fn token_lifetime_hours(value: &str) -> AppResult<i64> {
    match value.trim().parse::<i64>() {
        Ok(hours) if (1..=MAX_JWT_EXPIRATION_HOURS).contains(&hours) => Ok(hours),
        _ => Err(AppError::validation(format!(
            "JWT_EXPIRATION_HOURS must be a whole number between 1 and {}",
            MAX_JWT_EXPIRATION_HOURS
        ))),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
