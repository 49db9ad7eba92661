use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::offer::Offer;

/// Response de oferta promocional
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub discount: String,
    pub icon: String,
    pub icon_color: String,
    pub button_text: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Offer> for OfferResponse {
    fn from(offer: Offer) -> Self {
        Self {
            id: offer.id,
            title: offer.title,
            description: offer.description,
            discount: offer.discount,
            icon: offer.icon,
            icon_color: offer.icon_color,
            button_text: offer.button_text,
            active: offer.active,
            created_at: offer.created_at,
        }
    }
}
