//! Module declaration and lifecycle implementation

use crate::config::Config;
use crate::contract::ParkingSpotApi;
use crate::domain::Service;
use anyhow::{Context, Result};
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// Parking control module
pub struct ParkingControlModule {
    config: RwLock<Config>,
    service: RwLock<Option<Arc<Service>>>,
    client: RwLock<Option<Arc<dyn ParkingSpotApi>>>,
}

impl Default for ParkingControlModule {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl ParkingControlModule {
    pub fn new(config: Config) -> Self {
        Self {
            config: RwLock::new(config),
            service: RwLock::new(None),
            client: RwLock::new(None),
        }
    }

    /// Run database migrations
    pub async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None)
            .await
            .context("failed to apply parking control migrations")?;
        tracing::info!("Parking control migrations completed");
        Ok(())
    }

    /// Build repository, domain service and native client
    pub async fn init(&self, db: DatabaseConnection) -> Result<()> {
        let conn = Arc::new(db);

        let repo = Arc::new(
            crate::infra::storage::repositories::SeaOrmParkingSpotRepository::new(conn),
        );

        let service = Arc::new(Service::with_config(repo, &self.config.read()));
        *self.service.write() = Some(service.clone());

        let client: Arc<dyn ParkingSpotApi> =
            Arc::new(crate::api::native::NativeClient::new(service));
        *self.client.write() = Some(client);

        tracing::info!("Parking control initialized with native client registered");
        Ok(())
    }

    /// Native client for in-process callers
    pub fn client(&self) -> Result<Arc<dyn ParkingSpotApi>> {
        self.client
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }

    /// Register REST routes on the given router
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let service = self
            .service
            .read()
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))?
            .clone();
        let cors_max_age = Duration::from_secs(self.config.read().cors_max_age_secs);

        tracing::info!("Registering parking control REST routes");
        Ok(crate::api::rest::routes::register_routes(
            router,
            service,
            cors_max_age,
        ))
    }

    /// Serve the REST API until `cancel` fires
    pub async fn serve(self: Arc<Self>, listener: TcpListener, cancel: CancellationToken) -> Result<()> {
        let router = self.register_rest(axum::Router::new())?;

        tracing::info!(listen_addr = %listener.local_addr()?, "serving parking control API");
        axum::serve(listener, router)
            .with_graceful_shutdown(async move { cancel.cancelled().await })
            .await
            .context("HTTP server failed")?;

        tracing::info!("Parking control API stopped");
        Ok(())
    }
}
