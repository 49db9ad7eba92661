use crate::models::booking::Booking;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persistir un booking nuevo reservando el vehículo en la misma transacción
    ///
    /// La reserva es un update condicional: solo pasa si el vehículo sigue
    /// 'available' en el momento del write. Si otro booker ganó la carrera,
    /// rows_affected es 0 y la operación completa falla con Conflict, sin
    /// dejar ni booking huérfano ni doble reserva.
    pub async fn create_reserving(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error starting transaction: {}", e)))?;

        let reserved = sqlx::query(
            r#"
            UPDATE vehicles
            SET status = 'reserved', updated_at = $2
            WHERE id = $1 AND status = 'available'
            "#,
        )
        .bind(booking.vehicle_id)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error reserving vehicle: {}", e)))?;

        if reserved.rows_affected() != 1 {
            return Err(AppError::Conflict(
                "El vehículo ya no está disponible".to_string(),
            ));
        }

        let saved = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (
                id, user_id, vehicle_id, pickup_location, pickup_date, return_date,
                rental_months, rental_amount, security_deposit, total_price,
                status, customer_info, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(booking.id)
        .bind(booking.user_id)
        .bind(booking.vehicle_id)
        .bind(&booking.pickup_location)
        .bind(booking.pickup_date)
        .bind(booking.return_date)
        .bind(booking.rental_months)
        .bind(booking.rental_amount)
        .bind(booking.security_deposit)
        .bind(booking.total_price)
        .bind(booking.status)
        .bind(&booking.customer_info)
        .bind(booking.created_at)
        .bind(booking.updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating booking: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error committing booking: {}", e)))?;

        Ok(saved)
    }

    /// Bookings de un usuario, más recientes primero
    ///
    /// Sin paginación: el volumen por usuario es pequeño.
    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing bookings: {}", e)))?;

        Ok(bookings)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding booking: {}", e)))?;

        Ok(booking)
    }
}
