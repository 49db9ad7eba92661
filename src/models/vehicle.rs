//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle del catálogo del storefront.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Categoría del vehículo - mapea al ENUM vehicle_category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "vehicle_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Economy,
    Suv,
    Luxury,
}

/// Estado del vehículo - mapea al ENUM vehicle_status
///
/// Solo los vehículos en 'available' son visibles y reservables desde el
/// storefront; el resto de transiciones las maneja el portal administrativo.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "vehicle_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Available,
    Reserved,
    Rented,
    Inspection,
    Maintenance,
    Sold,
    #[sqlx(rename = "in-stock")]
    #[serde(rename = "in-stock")]
    InStock,
}

impl VehicleStatus {
    /// Un vehículo solo es reservable cuando está disponible
    pub fn is_bookable(&self) -> bool {
        matches!(self, VehicleStatus::Available)
    }
}

/// Ficha técnica del vehículo - persiste como JSONB
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSpecifications {
    pub seats: i32,
    pub transmission: String,
    pub fuel_type: String,
    pub year: i32,
    pub brand: String,
    pub model: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub vin: Option<String>,
    #[serde(default)]
    pub engine: Option<String>,
    #[serde(default)]
    pub mileage: Option<String>,
    #[serde(default)]
    pub fuel_economy: Option<String>,
}

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    pub category: VehicleCategory,
    pub price: Decimal,
    pub image: String,
    pub features: Vec<String>,
    pub status: VehicleStatus,
    pub specifications: Json<VehicleSpecifications>,
    pub stock_number: Option<String>,
    pub license_plate: Option<String>,
    pub vin: Option<String>,
    pub current_mileage: Option<Decimal>,
    pub last_service_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
