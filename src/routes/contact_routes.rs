use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::contact_controller::ContactController;
use crate::dto::contact_dto::{SubmitMessageRequest, SubmitMessageResponse};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_contact_router() -> Router<AppState> {
    Router::new().route("/", post(submit_message))
}

async fn submit_message(
    State(state): State<AppState>,
    Json(request): Json<SubmitMessageRequest>,
) -> Result<Json<ApiResponse<SubmitMessageResponse>>, AppError> {
    let controller = ContactController::new(state.pool.clone());
    let response = controller.submit(request).await?;
    Ok(Json(response))
}
