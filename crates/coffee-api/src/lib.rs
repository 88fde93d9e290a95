//! Coffee API - coffee catalog service with bearer-token login.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **services**: Catalog rules, login and token signing
//! - **infra**: Stores (SeaORM and in-memory) and migrations
//! - **api**: HTTP handlers, the authorization gate and routes
//!
//! Entities and the error taxonomy live in the `domain` crate; the HTTP error
//! type and shared configuration live in `common`.
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server on in-memory storage
//! cargo run -- serve --storage memory
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::{Config, StorageKind};
pub use services::Services;
