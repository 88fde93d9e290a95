//! Serve command - Starts the HTTP server.

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::{Config, StorageKind};
use crate::infra::Database;
use crate::services::Services;
use common::{AppError, AppResult};

/// Execute the serve command
pub async fn execute(args: ServeArgs, mut config: Config) -> AppResult<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(storage) = args.storage {
        config.storage = storage;
    }

    tracing::info!(
        service = %config.server.service_name,
        storage = %config.storage,
        "Starting server..."
    );

    let services = build_services(&config).await?;
    let app = create_router(AppState::new(&services, config.jwt.reject_invalid_tokens));

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

async fn build_services(config: &Config) -> AppResult<Services> {
    match config.storage {
        StorageKind::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            Services::in_memory(&config.jwt)
        }
        StorageKind::Database => {
            let db = Database::connect(&config.database)
                .await
                .map_err(|e| AppError::internal(format!("Database startup failed: {}", e)))?;
            Services::from_database(db, &config.jwt)
        }
    }
}
