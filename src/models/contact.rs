//! Modelo de ContactMessage

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// ContactMessage - mapea exactamente a la tabla contact_messages
///
/// Los estados 'read' y 'responded' los escribe el portal administrativo.
#[derive(Debug, Clone, FromRow)]
pub struct ContactMessage {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        phone: String,
        message: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            email,
            phone,
            message,
            status: "new".to_string(),
            created_at: Utc::now(),
        }
    }
}
