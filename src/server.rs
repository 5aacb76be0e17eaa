//! Server module for managing HTTP server lifecycle
//!
//! This module handles server initialization, startup, and graceful shutdown.

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;

use crate::api::routes::create_router;
use crate::config::{Environment, Settings};
use crate::repositories::Repositories;
use crate::services::seed_vehicles;
use crate::state::AppState;

/// HTTP server manager
pub struct Server {
    settings: Settings,
    environment: Environment,
}

impl Server {
    pub fn new(settings: Settings, environment: Environment) -> Self {
        Self {
            settings,
            environment,
        }
    }

    /// Start the server and run until shutdown signal
    ///
    /// This method:
    /// 1. Logs startup information
    /// 2. Creates the vehicle store and seeds it when configured
    /// 3. Binds to configured address
    /// 4. Serves until Ctrl+C or SIGTERM, then drains in-flight requests
    ///
    /// # Errors
    /// - Seed file read or parse errors
    /// - Address binding errors
    /// - Server runtime errors
    pub async fn run(self) -> anyhow::Result<()> {
        let settings = &self.settings;

        tracing::info!(
            app_name = %settings.application.name,
            app_version = %settings.application.version,
            environment = %self.environment,
            "Application starting"
        );

        tracing::info!(
            host = %settings.server.host,
            port = settings.server.port,
            base_path = %settings.server.base_path,
            request_timeout = settings.server.request_timeout,
            "Server configuration loaded"
        );

        tracing::info!(
            level = %settings.logger.level,
            console_enabled = settings.logger.console.enabled,
            file_enabled = settings.logger.file.enabled,
            "Logger configuration loaded"
        );

        let state = AppState::new(Repositories::new());

        if let Some(seed_file) = &settings.storage.seed_file {
            seed_vehicles(state.services.vehicles.as_ref(), seed_file).await?;
        }

        let router = create_router(state, settings);
        tracing::info!(
            vehicles_path = %settings.server.resource_path("vehicles"),
            openapi_enabled = settings.openapi.enabled,
            swagger_path = %settings.openapi.swagger_path,
            "Router configured"
        );

        let address = settings.server.address();
        let listener = TcpListener::bind(&address)
            .await
            .inspect_err(|e| tracing::error!(error = %e, address = %address, "Failed to bind to address"))
            .with_context(|| format!("Failed to bind to {}", address))?;

        tracing::info!(address = %address, "Server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

/// Waits for Ctrl+C or SIGTERM.
///
/// A signal whose handler cannot be installed is logged and never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
