use crate::models::vehicle::{Vehicle, VehicleCategory};
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Listar vehículos disponibles, más recientes primero
    pub async fn find_available(
        &self,
        category: Option<VehicleCategory>,
    ) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = match category {
            Some(cat) => {
                sqlx::query_as::<_, Vehicle>(
                    r#"
                    SELECT * FROM vehicles
                    WHERE status = 'available' AND category = $1
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(cat)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Vehicle>(
                    "SELECT * FROM vehicles WHERE status = 'available' ORDER BY created_at DESC",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| AppError::DatabaseError(format!("Error listing vehicles: {}", e)))?;

        Ok(vehicles)
    }

    /// Buscar un vehículo por id, sin importar su estado
    ///
    /// El caller decide la semántica de "reservable" consultando `status`.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding vehicle: {}", e)))?;

        Ok(vehicle)
    }
}
