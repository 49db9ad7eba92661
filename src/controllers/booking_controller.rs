use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::booking_dto::{BookingResponse, BookingWithVehicleResponse, CreateBookingRequest};
use crate::dto::ApiResponse;
use crate::models::booking::Booking;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::pricing;
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_email, validate_not_empty, validate_not_past, validate_phone, validate_range};

pub struct BookingController {
    booking_repository: BookingRepository,
    vehicle_repository: VehicleRepository,
}

impl BookingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            booking_repository: BookingRepository::new(pool.clone()),
            vehicle_repository: VehicleRepository::new(pool),
        }
    }

    /// Crear un booking en estado pending y reservar el vehículo
    pub async fn create(
        &self,
        user_id: Uuid,
        pickup_location: String,
        request: CreateBookingRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        // Toda la validación de campos ocurre antes de tocar la base de datos
        validate_create_request(&request, Utc::now())?;

        let vehicle = self
            .vehicle_repository
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        if !vehicle.status.is_bookable() {
            return Err(AppError::Conflict(
                "El vehículo ya no está disponible".to_string(),
            ));
        }

        let quote = pricing::quote(vehicle.price, request.pickup_date, request.months)?;

        let booking = Booking::new(
            user_id,
            vehicle.id,
            pickup_location,
            quote.pickup_date,
            quote.return_date,
            quote.months,
            quote.rental_amount,
            quote.security_deposit,
            quote.total_due_now,
            request.customer_info,
        );

        // Reserva condicional + insert en una transacción; una carrera perdida
        // sale como Conflict, nunca como doble reserva silenciosa
        let saved = self.booking_repository.create_reserving(&booking).await?;

        Ok(ApiResponse::success_with_message(
            saved.into(),
            "Solicitud de booking recibida exitosamente".to_string(),
        ))
    }

    /// Historial de bookings del usuario con su vehículo resuelto
    pub async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<BookingWithVehicleResponse>, AppError> {
        let bookings = self.booking_repository.find_by_user(user_id).await?;

        let mut result = Vec::with_capacity(bookings.len());
        for booking in bookings {
            // Un vehículo borrado no rompe el listado: se devuelve null
            let vehicle = self.vehicle_repository.find_by_id(booking.vehicle_id).await?;

            let response = BookingResponse::from(booking);
            if response.display_months != response.rental_months {
                log::warn!(
                    "Booking {} con duración inconsistente: rental_months={} pero ceil(days/30)={}",
                    response.id,
                    response.rental_months,
                    response.display_months
                );
            }

            result.push(BookingWithVehicleResponse {
                booking: response,
                vehicle: vehicle.map(Into::into),
            });
        }

        Ok(result)
    }

    pub async fn get_by_id(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<BookingWithVehicleResponse, AppError> {
        let booking = self
            .booking_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking no encontrado".to_string()))?;

        if booking.user_id != user_id {
            return Err(AppError::Forbidden(
                "No tienes permiso para acceder a este booking".to_string(),
            ));
        }

        let vehicle = self.vehicle_repository.find_by_id(booking.vehicle_id).await?;

        Ok(BookingWithVehicleResponse {
            booking: booking.into(),
            vehicle: vehicle.map(Into::into),
        })
    }
}

/// Validar el request de creación sin tocar la base de datos
pub fn validate_create_request(
    request: &CreateBookingRequest,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    validate_range(request.months, pricing::MIN_MONTHS, pricing::MAX_MONTHS).map_err(|_| {
        AppError::ValidationError(format!(
            "La duración debe estar entre {} y {} meses",
            pricing::MIN_MONTHS,
            pricing::MAX_MONTHS
        ))
    })?;

    validate_not_past(request.pickup_date, now).map_err(|_| {
        AppError::ValidationError("La fecha de recogida no puede estar en el pasado".to_string())
    })?;

    let customer = &request.customer_info;
    validate_not_empty(&customer.first_name)
        .map_err(|_| AppError::ValidationError("El nombre es requerido".to_string()))?;
    validate_not_empty(&customer.last_name)
        .map_err(|_| AppError::ValidationError("El apellido es requerido".to_string()))?;
    validate_email(&customer.email)
        .map_err(|_| AppError::ValidationError("Email inválido".to_string()))?;
    validate_phone(&customer.phone)
        .map_err(|_| AppError::ValidationError("Teléfono inválido".to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::booking::CustomerInfo;
    use chrono::Duration;

    fn valid_request() -> CreateBookingRequest {
        CreateBookingRequest {
            vehicle_id: Uuid::new_v4(),
            pickup_date: Utc::now() + Duration::days(2),
            months: 3,
            customer_info: CustomerInfo {
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                email: "john@example.com".to_string(),
                phone: "+1 (555) 123-4567".to_string(),
            },
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate_create_request(&valid_request(), Utc::now()).is_ok());
    }

    #[test]
    fn test_rejects_months_out_of_range() {
        let mut request = valid_request();
        request.months = 0;
        assert!(matches!(
            validate_create_request(&request, Utc::now()),
            Err(AppError::ValidationError(_))
        ));

        request.months = 13;
        assert!(validate_create_request(&request, Utc::now()).is_err());
    }

    #[test]
    fn test_rejects_past_pickup_date() {
        let mut request = valid_request();
        request.pickup_date = Utc::now() - Duration::days(1);
        assert!(matches!(
            validate_create_request(&request, Utc::now()),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_rejects_empty_customer_fields() {
        let now = Utc::now();

        let mut request = valid_request();
        request.customer_info.first_name = "".to_string();
        assert!(validate_create_request(&request, now).is_err());

        let mut request = valid_request();
        request.customer_info.last_name = "   ".to_string();
        assert!(validate_create_request(&request, now).is_err());

        let mut request = valid_request();
        request.customer_info.email = "no-es-email".to_string();
        assert!(validate_create_request(&request, now).is_err());

        let mut request = valid_request();
        request.customer_info.phone = "123".to_string();
        assert!(validate_create_request(&request, now).is_err());
    }
}
