use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::offer_controller::OfferController;
use crate::dto::offer_dto::OfferResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_offer_router() -> Router<AppState> {
    Router::new().route("/", get(list_offers))
}

async fn list_offers(
    State(state): State<AppState>,
) -> Result<Json<Vec<OfferResponse>>, AppError> {
    let controller = OfferController::new(state.pool.clone());
    let response = controller.list_active().await?;
    Ok(Json(response))
}
