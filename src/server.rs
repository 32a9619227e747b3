//! HTTP server initialization and runtime setup.
//!
//! Selects the storage backend, wires up the services, and runs the Axum
//! server lifecycle.

use crate::application::services::{RequestSigner, StatsService, TrackingService};
use crate::config::Config;
use crate::domain::repositories::{EventRepository, LinkRepository};
use crate::infrastructure::memory::{MemoryEventRepository, MemoryLinkRepository};
use crate::infrastructure::persistence::{PgEventRepository, PgLinkRepository};
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
/// - The storage backend (PostgreSQL pool + migrations, or in-memory stores)
/// - The request signer keyed by the configured secret
/// - The Axum HTTP server
///
/// # Errors
///
/// Returns an error if the database connection, migration run, or server
/// bind fails.
pub async fn run(config: Config) -> Result<()> {
    let (link_repository, event_repository, backend) = build_repositories(&config).await?;

    let signer = RequestSigner::new(config.hmac_secret.clone());
    let tracking_service = Arc::new(TrackingService::new(
        link_repository,
        event_repository.clone(),
        signer,
    ));
    let stats_service = Arc::new(StatsService::new(event_repository));

    let state = AppState::new(
        tracking_service,
        stats_service,
        backend,
        config.dashboard_event_limit,
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}

/// Builds the configured storage backend behind the repository traits.
async fn build_repositories(
    config: &Config,
) -> Result<(Arc<dyn LinkRepository>, Arc<dyn EventRepository>, &'static str)> {
    match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .connect(url)
                .await?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations").run(&pool).await?;

            let pool = Arc::new(pool);
            Ok((
                Arc::new(PgLinkRepository::new(pool.clone())) as Arc<dyn LinkRepository>,
                Arc::new(PgEventRepository::new(pool)) as Arc<dyn EventRepository>,
                "postgres",
            ))
        }
        None => {
            tracing::info!("No DATABASE_URL configured, using in-memory storage");
            Ok((
                Arc::new(MemoryLinkRepository::new()) as Arc<dyn LinkRepository>,
                Arc::new(MemoryEventRepository::new()) as Arc<dyn EventRepository>,
                "memory",
            ))
        }
    }
}
