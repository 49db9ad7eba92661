use sqlx::PgPool;

use crate::dto::contact_dto::{SubmitMessageRequest, SubmitMessageResponse};
use crate::dto::ApiResponse;
use crate::models::contact::ContactMessage;
use crate::repositories::contact_repository::ContactRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_email, validate_not_empty, validate_phone};

pub struct ContactController {
    repository: ContactRepository,
}

impl ContactController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ContactRepository::new(pool),
        }
    }

    pub async fn submit(
        &self,
        request: SubmitMessageRequest,
    ) -> Result<ApiResponse<SubmitMessageResponse>, AppError> {
        // Validar campos antes de cualquier llamada de red
        validate_not_empty(&request.first_name)
            .map_err(|_| AppError::ValidationError("El nombre es requerido".to_string()))?;
        validate_not_empty(&request.last_name)
            .map_err(|_| AppError::ValidationError("El apellido es requerido".to_string()))?;
        validate_email(&request.email)
            .map_err(|_| AppError::ValidationError("Email inválido".to_string()))?;
        validate_phone(&request.phone)
            .map_err(|_| AppError::ValidationError("Teléfono inválido".to_string()))?;
        validate_not_empty(&request.message)
            .map_err(|_| AppError::ValidationError("El mensaje es requerido".to_string()))?;

        let message = ContactMessage::new(
            request.first_name.trim().to_string(),
            request.last_name.trim().to_string(),
            request.email.trim().to_string(),
            request.phone.trim().to_string(),
            request.message.trim().to_string(),
        );

        let saved = self.repository.create(&message).await?;

        Ok(ApiResponse::success_with_message(
            SubmitMessageResponse { id: saved.id },
            "Mensaje enviado exitosamente".to_string(),
        ))
    }
}
