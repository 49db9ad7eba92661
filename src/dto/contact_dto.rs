use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request para enviar un mensaje de contacto
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitMessageRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Response con el id del mensaje creado
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitMessageResponse {
    pub id: Uuid,
}
