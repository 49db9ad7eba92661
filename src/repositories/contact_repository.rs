use crate::models::contact::ContactMessage;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, message: &ContactMessage) -> Result<ContactMessage, AppError> {
        let saved = sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_messages (
                id, first_name, last_name, email, phone, message, status, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(message.id)
        .bind(&message.first_name)
        .bind(&message.last_name)
        .bind(&message.email)
        .bind(&message.phone)
        .bind(&message.message)
        .bind(&message.status)
        .bind(message.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating contact message: {}", e)))?;

        Ok(saved)
    }
}
