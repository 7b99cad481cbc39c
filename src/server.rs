//! HTTP server initialization and runtime setup.
//!
//! Handles the database connection, repository wiring, and Axum server lifecycle.

use crate::application::services::TrackingService;
use crate::config::Config;
use crate::infrastructure::persistence::{PgClickRepository, PgReferralCodeRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Referral code and click repositories
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// The `referral_codes` and `referral_clicks` tables are provisioned by the
/// backing platform; this service connects to them as-is.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    let pool = Arc::new(pool);
    let code_repository = Arc::new(PgReferralCodeRepository::new(pool.clone()));
    let click_repository = Arc::new(PgClickRepository::new(pool));

    let tracking_service = Arc::new(TrackingService::new(code_repository, click_repository));

    let state = AppState { tracking_service };

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install shutdown signal handler");
    }
}
