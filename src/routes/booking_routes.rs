use axum::{
    extract::{Path, State},
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::{BookingResponse, BookingWithVehicleResponse, CreateBookingRequest};
use crate::dto::ApiResponse;
use crate::middleware::auth_middleware::{require_auth, AuthUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas de bookings, todas protegidas por JWT
pub fn create_booking_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_booking))
        .route("/", get(list_bookings))
        .route("/:id", get(get_booking))
        .layer(middleware::from_fn_with_state(state, require_auth))
}

async fn create_booking(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller
        .create(user.id, state.config.pickup_location.clone(), request)
        .await?;
    Ok(Json(response))
}

async fn list_bookings(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<BookingWithVehicleResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.list_for_user(user.id).await?;
    Ok(Json(response))
}

async fn get_booking(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookingWithVehicleResponse>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.get_by_id(id, user.id).await?;
    Ok(Json(response))
}
