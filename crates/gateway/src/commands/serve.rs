//! Serve command - migrate, seed roles and start the HTTP server.

use common::{AppError, AppResult};
use iam_service::domain::SeedRolesCommand;

use crate::cli::ServeArgs;
use crate::config::Config;
use crate::infra::Database;
use crate::routes::create_router;
use crate::state::AppState;

pub async fn execute(args: ServeArgs, mut config: Config) -> AppResult<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    tracing::info!("Starting server...");

    let database = Database::connect(&config.database).await?;
    database.run_migrations().await?;
    tracing::info!("Migrations applied");

    let state = AppState::from_database(database, &config);
    state.role_commands.handle(SeedRolesCommand).await?;

    let app = create_router(state);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
