//! Catálogo de vehículos con refresco realtime
//!
//! Mantiene un snapshot en memoria del listado de vehículos disponibles y lo
//! re-lee completo cada vez que Postgres notifica un cambio en la tabla
//! vehicles (canal `vehicles_changed`, ver migrations/). Nunca aplica deltas:
//! el catálogo es pequeño y la re-lectura total evita problemas de orden de
//! entrega de las notificaciones.

use std::sync::Arc;

use sqlx::postgres::PgListener;
use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::models::vehicle::{Vehicle, VehicleCategory};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppResult;

/// Canal de NOTIFY que dispara el trigger de la tabla vehicles
const VEHICLES_CHANNEL: &str = "vehicles_changed";

/// Handle compartido al snapshot del catálogo
///
/// `None` significa que el watcher todavía no hizo la primera lectura.
#[derive(Clone, Default)]
pub struct CatalogHandle {
    inner: Arc<RwLock<Option<Vec<Vehicle>>>>,
}

impl CatalogHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reemplazar el snapshot completo
    pub async fn replace(&self, vehicles: Vec<Vehicle>) {
        let mut guard = self.inner.write().await;
        *guard = Some(vehicles);
    }

    /// Snapshot actual, filtrado por categoría si se pide
    pub async fn snapshot(&self, category: Option<VehicleCategory>) -> Option<Vec<Vehicle>> {
        let guard = self.inner.read().await;
        guard.as_ref().map(|vehicles| match category {
            Some(cat) => vehicles
                .iter()
                .filter(|v| v.category == cat)
                .cloned()
                .collect(),
            None => vehicles.clone(),
        })
    }
}

/// Watcher que suscribe al canal de cambios y refresca el snapshot
pub struct CatalogWatcher {
    pool: PgPool,
    catalog: CatalogHandle,
}

impl CatalogWatcher {
    pub fn new(pool: PgPool, catalog: CatalogHandle) -> Self {
        Self { pool, catalog }
    }

    /// Re-leer el listado completo de disponibles y publicarlo
    pub async fn refresh(&self) -> AppResult<usize> {
        let repository = VehicleRepository::new(self.pool.clone());
        let vehicles = repository.find_available(None).await?;
        let count = vehicles.len();
        self.catalog.replace(vehicles).await;
        Ok(count)
    }

    /// Loop de suscripción: cada notificación dispara una re-lectura completa
    pub async fn run(self) {
        loop {
            if let Err(e) = self.listen_once().await {
                log::warn!("Catalog watcher desconectado: {}, reintentando en 5s", e);
                tokio::time::sleep(std::time::Duration::from_secs(5)).await;
            }
        }
    }

    async fn listen_once(&self) -> anyhow::Result<()> {
        let mut listener = PgListener::connect_with(&self.pool).await?;
        listener.listen(VEHICLES_CHANNEL).await?;

        // Lectura inicial para no servir un catálogo vacío
        match self.refresh().await {
            Ok(count) => log::info!("Catálogo cargado: {} vehículos disponibles", count),
            Err(e) => log::warn!("Error en carga inicial del catálogo: {}", e),
        }

        loop {
            let notification = listener.recv().await?;
            log::debug!(
                "Cambio en vehicles notificado (id {}), refrescando catálogo",
                notification.payload()
            );
            if let Err(e) = self.refresh().await {
                log::warn!("Error refrescando catálogo: {}", e);
            }
        }
    }

    /// Lanzar el watcher en background
    pub fn spawn(pool: PgPool, catalog: CatalogHandle) {
        tokio::spawn(CatalogWatcher::new(pool, catalog).run());
    }
}
