use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::vehicle_dto::VehicleResponse;
use crate::models::vehicle::VehicleCategory;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::catalog::CatalogHandle;
use crate::utils::errors::AppError;

pub struct VehicleController {
    repository: VehicleRepository,
    catalog: CatalogHandle,
}

impl VehicleController {
    pub fn new(pool: PgPool, catalog: CatalogHandle) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
            catalog,
        }
    }

    /// Listar vehículos disponibles, opcionalmente por categoría
    ///
    /// Sirve el snapshot del catalog watcher; si el watcher todavía no hizo
    /// la primera lectura, consulta directo a la base de datos.
    pub async fn list(
        &self,
        category: Option<VehicleCategory>,
    ) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = match self.catalog.snapshot(category).await {
            Some(vehicles) => vehicles,
            None => self.repository.find_available(category).await?,
        };

        Ok(vehicles.into_iter().map(Into::into).collect())
    }

    /// Obtener un vehículo por id, sin importar su estado
    ///
    /// El response expone `status`: la vista de detalle rechaza por su cuenta
    /// los vehículos no disponibles.
    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(vehicle.into())
    }
}
