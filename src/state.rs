use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::services::catalog::CatalogHandle;

/// Estado compartido de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub catalog: CatalogHandle,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig, catalog: CatalogHandle) -> Self {
        Self {
            pool,
            config,
            catalog,
        }
    }
}
