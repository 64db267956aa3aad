//! # beautycared: salon site daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise logging
//! - Connect to the selected datastore (`SQLite` or the hosted REST API)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use beautycare_adapter_datastore_rest::RestClient;
use beautycare_adapter_datastore_rest::careers::RestCareerApplicationRepository;
use beautycare_adapter_datastore_rest::catalog::{RestGalleryRepository, RestServiceRepository};
use beautycare_adapter_datastore_rest::scheduling::{RestBookingRepository, RestSlotRepository};
use beautycare_adapter_http_axum::router;
use beautycare_adapter_http_axum::state::AppState;
use beautycare_adapter_storage_sqlite_sqlx::booking_repo::SqliteBookingRepository;
use beautycare_adapter_storage_sqlite_sqlx::career_repo::SqliteCareerApplicationRepository;
use beautycare_adapter_storage_sqlite_sqlx::gallery_repo::SqliteGalleryRepository;
use beautycare_adapter_storage_sqlite_sqlx::pool;
use beautycare_adapter_storage_sqlite_sqlx::seed::seed_demo;
use beautycare_adapter_storage_sqlite_sqlx::service_repo::SqliteServiceRepository;
use beautycare_adapter_storage_sqlite_sqlx::slot_repo::SqliteSlotRepository;
use beautycare_app::ports::{
    BookingRepository, CareerApplicationRepository, GalleryRepository, ServiceRepository,
    SlotRepository,
};
use beautycare_app::services::availability_service::AvailabilityService;
use beautycare_app::services::career_service::CareerService;
use beautycare_app::services::catalog_service::CatalogService;
use beautycare_app::services::gallery_service::GalleryService;
use tracing_subscriber::EnvFilter;

use crate::config::{Backend, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    match config.datastore.backend {
        Backend::Sqlite => {
            let db = pool::Config {
                database_url: config.datastore.sqlite.url.clone(),
            }
            .build()
            .await?;
            let pool = db.pool().clone();

            if config.datastore.sqlite.seed_demo {
                seed_demo(&pool, beautycare_domain::time::today()).await?;
            }

            let state = AppState::new(
                CatalogService::new(SqliteServiceRepository::new(pool.clone())),
                GalleryService::new(SqliteGalleryRepository::new(pool.clone())),
                AvailabilityService::new(
                    SqliteSlotRepository::new(pool.clone()),
                    SqliteBookingRepository::new(pool.clone()),
                ),
                CareerService::new(SqliteCareerApplicationRepository::new(pool)),
            );
            tracing::info!(url = %config.datastore.sqlite.url, "using sqlite datastore");
            serve(state, &config).await
        }
        Backend::Rest => {
            let client = RestClient::new(&config.datastore.rest)?;

            let state = AppState::new(
                CatalogService::new(RestServiceRepository::new(client.clone())),
                GalleryService::new(RestGalleryRepository::new(client.clone())),
                AvailabilityService::new(
                    RestSlotRepository::new(client.clone()),
                    RestBookingRepository::new(client.clone()),
                ),
                CareerService::new(RestCareerApplicationRepository::new(client)),
            );
            tracing::info!(url = %config.datastore.rest.url, "using rest datastore");
            serve(state, &config).await
        }
    }
}

async fn serve<SR, GR, SL, BR, CR>(
    state: AppState<SR, GR, SL, BR, CR>,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>>
where
    SR: ServiceRepository + Send + Sync + 'static,
    GR: GalleryRepository + Send + Sync + 'static,
    SL: SlotRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
    CR: CareerApplicationRepository + Send + Sync + 'static,
{
    let app = router::build_with_static(state, &config.server.static_dir);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("beautycared listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("beautycared stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
