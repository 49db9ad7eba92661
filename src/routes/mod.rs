pub mod auth_routes;
pub mod booking_routes;
pub mod contact_routes;
pub mod offer_routes;
pub mod vehicle_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Ensambla el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(&state.config.cors_origins)
    };

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/vehicle", vehicle_routes::create_vehicle_router())
        .nest(
            "/api/booking",
            booking_routes::create_booking_router(state.clone()),
        )
        .nest("/api/auth", auth_routes::create_auth_router(state.clone()))
        .nest("/api/offer", offer_routes::create_offer_router())
        .nest("/api/contact", contact_routes::create_contact_router())
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "vehicle-rental-api"
    }))
}
