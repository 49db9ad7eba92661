//! Tests de integración contra Postgres
//!
//! Cubren la reserva condicional transaccional y el historial del usuario.
//! Corren con `#[sqlx::test]`: cada test recibe una base de datos limpia con
//! las migraciones de `migrations/` ya aplicadas.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use vehicle_rental::controllers::booking_controller::BookingController;
use vehicle_rental::dto::booking_dto::CreateBookingRequest;
use vehicle_rental::models::booking::{Booking, BookingStatus, CustomerInfo};
use vehicle_rental::models::user::UserProfile;
use vehicle_rental::models::vehicle::{VehicleCategory, VehicleSpecifications, VehicleStatus};
use vehicle_rental::repositories::booking_repository::BookingRepository;
use vehicle_rental::repositories::user_profile_repository::UserProfileRepository;
use vehicle_rental::services::pricing;
use vehicle_rental::utils::errors::AppError;

fn customer() -> CustomerInfo {
    CustomerInfo {
        first_name: "Ana".to_string(),
        last_name: "García".to_string(),
        email: "ana@example.com".to_string(),
        phone: "+1 (940) 123-4567".to_string(),
    }
}

fn booking_request(vehicle_id: Uuid, months: i32) -> CreateBookingRequest {
    CreateBookingRequest {
        vehicle_id,
        pickup_date: Utc::now() + Duration::days(3),
        months,
        customer_info: customer(),
    }
}

fn booking_for(
    user_id: Uuid,
    vehicle_id: Uuid,
    monthly_rate: Decimal,
    pickup: DateTime<Utc>,
    months: i32,
) -> Booking {
    let quote = pricing::quote(monthly_rate, pickup, months).unwrap();
    Booking::new(
        user_id,
        vehicle_id,
        "Denton, Texas".to_string(),
        quote.pickup_date,
        quote.return_date,
        quote.months,
        quote.rental_amount,
        quote.security_deposit,
        quote.total_due_now,
        customer(),
    )
}

async fn insert_user(pool: &PgPool) -> Uuid {
    let profile = UserProfile::new(
        format!("{}@example.com", Uuid::new_v4()),
        "$2b$12$hash".to_string(),
        "Ana".to_string(),
        "García".to_string(),
        None,
    );
    UserProfileRepository::new(pool.clone())
        .create(&profile)
        .await
        .unwrap();
    profile.id
}

async fn insert_vehicle(pool: &PgPool, status: VehicleStatus, price: i64) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO vehicles (id, name, category, price, image, status, specifications)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(id)
    .bind("Toyota Corolla")
    .bind(VehicleCategory::Economy)
    .bind(Decimal::from(price))
    .bind("https://example.com/corolla.jpg")
    .bind(status)
    .bind(Json(VehicleSpecifications {
        seats: 5,
        transmission: "automatic".to_string(),
        fuel_type: "gasoline".to_string(),
        year: 2023,
        brand: "Toyota".to_string(),
        model: "Corolla".to_string(),
        color: None,
        vin: None,
        engine: None,
        mileage: None,
        fuel_economy: None,
    }))
    .execute(pool)
    .await
    .unwrap();
    id
}

async fn vehicle_status(pool: &PgPool, id: Uuid) -> VehicleStatus {
    let (status,): (VehicleStatus,) = sqlx::query_as("SELECT status FROM vehicles WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap();
    status
}

async fn booking_count(pool: &PgPool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bookings")
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

#[sqlx::test]
async fn test_create_reserves_vehicle_and_stores_breakdown(pool: PgPool) {
    let user_id = insert_user(&pool).await;
    let vehicle_id = insert_vehicle(&pool, VehicleStatus::Available, 650).await;

    let controller = BookingController::new(pool.clone());
    let response = controller
        .create(user_id, "Denton, Texas".to_string(), booking_request(vehicle_id, 3))
        .await
        .unwrap();

    let booking = response.data.unwrap();
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.rental_months, 3);
    assert_eq!(booking.rental_amount, Decimal::from(1950));
    assert_eq!(booking.security_deposit, Decimal::from(650));
    assert_eq!(booking.total_price, Decimal::from(2600));

    // El vehículo quedó reservado en la misma transacción
    assert_eq!(vehicle_status(&pool, vehicle_id).await, VehicleStatus::Reserved);

    // Y aparece en el historial del usuario con el desglose exacto
    let listed = controller.list_for_user(user_id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].booking.id, booking.id);
    assert_eq!(listed[0].booking.status, BookingStatus::Pending);
    assert_eq!(listed[0].booking.rental_amount, Decimal::from(1950));
    assert_eq!(listed[0].booking.security_deposit, Decimal::from(650));
    assert_eq!(listed[0].booking.total_price, Decimal::from(2600));
    assert_eq!(listed[0].booking.display_months, 3);
    assert_eq!(listed[0].vehicle.as_ref().unwrap().id, vehicle_id);
}

#[sqlx::test]
async fn test_create_conflicts_on_non_available_vehicle(pool: PgPool) {
    let user_id = insert_user(&pool).await;
    let vehicle_id = insert_vehicle(&pool, VehicleStatus::Reserved, 650).await;

    let controller = BookingController::new(pool.clone());
    let result = controller
        .create(user_id, "Denton, Texas".to_string(), booking_request(vehicle_id, 2))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(booking_count(&pool).await, 0);
    assert_eq!(vehicle_status(&pool, vehicle_id).await, VehicleStatus::Reserved);
}

#[sqlx::test]
async fn test_lost_race_rolls_back_without_booking_row(pool: PgPool) {
    let user_id = insert_user(&pool).await;
    let vehicle_id = insert_vehicle(&pool, VehicleStatus::Available, 500).await;

    let repository = BookingRepository::new(pool.clone());
    let pickup = Utc::now() + Duration::days(5);

    let first = booking_for(user_id, vehicle_id, Decimal::from(500), pickup, 3);
    repository.create_reserving(&first).await.unwrap();

    // Segundo booker que pasó el chequeo de disponibilidad antes del write:
    // el update condicional afecta 0 filas y la transacción entera cae
    let second = booking_for(user_id, vehicle_id, Decimal::from(500), pickup, 2);
    let result = repository.create_reserving(&second).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(booking_count(&pool).await, 1);
    assert_eq!(vehicle_status(&pool, vehicle_id).await, VehicleStatus::Reserved);
}

#[sqlx::test]
async fn test_list_tolerates_hard_deleted_vehicle(pool: PgPool) {
    let user_id = insert_user(&pool).await;
    let vehicle_id = insert_vehicle(&pool, VehicleStatus::Available, 500).await;

    let controller = BookingController::new(pool.clone());
    controller
        .create(user_id, "Denton, Texas".to_string(), booking_request(vehicle_id, 1))
        .await
        .unwrap();

    sqlx::query("DELETE FROM vehicles WHERE id = $1")
        .bind(vehicle_id)
        .execute(&pool)
        .await
        .unwrap();

    let listed = controller.list_for_user(user_id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert!(listed[0].vehicle.is_none());
}
