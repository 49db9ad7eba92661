use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::vehicle::{Vehicle, VehicleCategory, VehicleSpecifications, VehicleStatus};

/// Response de vehículo para la API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: Uuid,
    pub name: String,
    pub category: VehicleCategory,
    pub price: Decimal,
    /// La tarifa es siempre mensual en este despliegue
    pub price_unit: &'static str,
    pub image: String,
    pub features: Vec<String>,
    pub status: VehicleStatus,
    pub specifications: VehicleSpecifications,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_plate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_mileage: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_service_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            category: vehicle.category,
            price: vehicle.price,
            price_unit: "month",
            image: vehicle.image,
            features: vehicle.features,
            status: vehicle.status,
            specifications: vehicle.specifications.0,
            stock_number: vehicle.stock_number,
            license_plate: vehicle.license_plate,
            vin: vehicle.vin,
            current_mileage: vehicle.current_mileage,
            last_service_date: vehicle.last_service_date,
            created_at: vehicle.created_at,
            updated_at: vehicle.updated_at,
        }
    }
}

/// Filtros para el listado de vehículos
#[derive(Debug, Deserialize)]
pub struct VehicleFilters {
    pub category: Option<VehicleCategory>,
}
