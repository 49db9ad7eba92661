//! Modelo de Offer
//!
//! Tarjetas promocionales de solo lectura desde el storefront.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Offer - mapea exactamente a la tabla offers
#[derive(Debug, Clone, FromRow)]
pub struct Offer {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub discount: String,
    pub icon: String,
    pub icon_color: String,
    pub button_text: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
