//! Modelo de Booking
//!
//! Este módulo contiene el struct Booking y su ciclo de vida. El storefront
//! solo crea bookings en 'pending'; los estados posteriores los escribe el
//! portal administrativo.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado del booking - mapea al ENUM booking_status
///
/// Ciclo de vida: pending → confirmed → active → inspection → completed,
/// con cancelled alcanzable desde cualquier estado no terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Active,
    Inspection,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Estados finales: no admiten más transiciones
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }

    /// cancelled es alcanzable desde cualquier estado no terminal
    pub fn can_cancel(&self) -> bool {
        !self.is_terminal()
    }
}

/// Datos de contacto capturados al momento de reservar, independientes del
/// perfil vivo del usuario.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// Booking principal - mapea exactamente a la tabla bookings
#[derive(Debug, Clone, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub pickup_location: String,
    pub pickup_date: DateTime<Utc>,
    pub return_date: DateTime<Utc>,
    pub rental_months: i32,
    pub rental_amount: Decimal,
    pub security_deposit: Decimal,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub customer_info: Json<CustomerInfo>,
    pub actual_pickup_date: Option<DateTime<Utc>>,
    pub actual_return_date: Option<DateTime<Utc>>,
    pub extension_count: Option<i32>,
    pub pickup_mileage: Option<Decimal>,
    pub return_mileage: Option<Decimal>,
    pub admin_notes: Option<String>,
    pub security_deposit_deduction: Option<Decimal>,
    pub security_deposit_amount_returned: Option<Decimal>,
    pub security_deposit_returned: Option<bool>,
    pub security_deposit_return_date: Option<DateTime<Utc>>,
    pub deduction_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Crear un booking nuevo en estado pending con el desglose ya calculado
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: Uuid,
        vehicle_id: Uuid,
        pickup_location: String,
        pickup_date: DateTime<Utc>,
        return_date: DateTime<Utc>,
        rental_months: i32,
        rental_amount: Decimal,
        security_deposit: Decimal,
        total_price: Decimal,
        customer_info: CustomerInfo,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            vehicle_id,
            pickup_location,
            pickup_date,
            return_date,
            rental_months,
            rental_amount,
            security_deposit,
            total_price,
            status: BookingStatus::Pending,
            customer_info: Json(customer_info),
            actual_pickup_date: None,
            actual_return_date: None,
            extension_count: None,
            pickup_mileage: None,
            return_mileage: None,
            admin_notes: None,
            security_deposit_deduction: None,
            security_deposit_amount_returned: None,
            security_deposit_returned: None,
            security_deposit_return_date: None,
            deduction_reason: None,
            created_at: now,
            updated_at: now,
        }
    }
}
