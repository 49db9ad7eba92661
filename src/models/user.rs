//! Modelo de UserProfile
//!
//! El perfil comparte identidad con el token de sesión (claim `sub`).
//! Se crea en el registro, o perezosamente en el primer acceso autenticado
//! para cuentas aprovisionadas fuera del storefront.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// UserProfile - mapea exactamente a la tabla user_profiles
#[derive(Debug, Clone, FromRow)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(
        email: String,
        password_hash: String,
        first_name: String,
        last_name: String,
        phone: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            first_name,
            last_name,
            phone,
            created_at: now,
            updated_at: now,
        }
    }
}
