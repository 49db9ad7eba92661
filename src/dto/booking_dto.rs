use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dto::vehicle_dto::VehicleResponse;
use crate::models::booking::{Booking, BookingStatus, CustomerInfo};
use crate::services::pricing;

/// Request para crear un booking
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub vehicle_id: Uuid,
    pub pickup_date: DateTime<Utc>,
    pub months: i32,
    pub customer_info: CustomerInfo,
}

/// Response de booking para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
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
    pub customer_info: CustomerInfo,
    /// Duración re-derivada de los timestamps almacenados, para display
    pub rental_days: i64,
    /// ceil(rental_days / 30); debe coincidir con rental_months
    pub display_months: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_pickup_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_return_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        let days = pricing::rental_days(booking.pickup_date, booking.return_date);
        Self {
            id: booking.id,
            user_id: booking.user_id,
            vehicle_id: booking.vehicle_id,
            pickup_location: booking.pickup_location,
            pickup_date: booking.pickup_date,
            return_date: booking.return_date,
            rental_months: booking.rental_months,
            rental_amount: booking.rental_amount,
            security_deposit: booking.security_deposit,
            total_price: booking.total_price,
            status: booking.status,
            customer_info: booking.customer_info.0,
            rental_days: days,
            display_months: pricing::display_months(days),
            actual_pickup_date: booking.actual_pickup_date,
            actual_return_date: booking.actual_return_date,
            admin_notes: booking.admin_notes,
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}

/// Booking con su vehículo resuelto para el historial
///
/// `vehicle` es null cuando el vehículo fue borrado: el listado no falla,
/// el cliente muestra un placeholder.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingWithVehicleResponse {
    #[serde(flatten)]
    pub booking: BookingResponse,
    pub vehicle: Option<VehicleResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use sqlx::types::Json;

    fn sample_booking(months: i32) -> Booking {
        let pickup = Utc::now() + Duration::days(3);
        Booking::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Denton, Texas".to_string(),
            pickup,
            pickup + Duration::days(months as i64 * 30),
            months,
            Decimal::from(500 * months as i64),
            Decimal::from(500),
            Decimal::from(500 * months as i64 + 500),
            CustomerInfo {
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                email: "jane@example.com".to_string(),
                phone: "+1 555 987 6543".to_string(),
            },
        )
    }

    #[test]
    fn test_display_months_matches_stored_months() {
        // rental_months almacenado = 2 => ceil(60/30) = 2
        let response = BookingResponse::from(sample_booking(2));
        assert_eq!(response.rental_days, 60);
        assert_eq!(response.display_months, 2);
        assert_eq!(response.display_months, response.rental_months);
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let response = BookingResponse::from(sample_booking(3));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "pending");
        assert!(json.get("rentalAmount").is_some());
        assert!(json.get("securityDeposit").is_some());
        assert!(json.get("displayMonths").is_some());
        assert!(json.get("rental_amount").is_none());
    }

    #[test]
    fn test_with_vehicle_flattens_and_allows_null_vehicle() {
        let wrapped = BookingWithVehicleResponse {
            booking: BookingResponse::from(sample_booking(1)),
            vehicle: None,
        };
        let json = serde_json::to_value(&wrapped).unwrap();

        // Flatten: los campos del booking quedan al tope
        assert!(json.get("pickupDate").is_some());
        assert_eq!(json["vehicle"], serde_json::Value::Null);
    }

    #[test]
    fn test_booking_json_roundtrip_preserves_customer_info() {
        let mut booking = sample_booking(2);
        booking.customer_info = Json(CustomerInfo {
            first_name: "Ana".to_string(),
            last_name: "García".to_string(),
            email: "ana@example.com".to_string(),
            phone: "+1 555 111 2222".to_string(),
        });

        let response = BookingResponse::from(booking);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["customerInfo"]["firstName"], "Ana");
        assert_eq!(json["customerInfo"]["phone"], "+1 555 111 2222");
    }
}
