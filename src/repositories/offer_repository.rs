use crate::models::offer::Offer;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct OfferRepository {
    pool: PgPool,
}

impl OfferRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Ofertas activas, más recientes primero
    pub async fn find_active(&self) -> Result<Vec<Offer>, AppError> {
        let offers = sqlx::query_as::<_, Offer>(
            "SELECT * FROM offers WHERE active = true ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing offers: {}", e)))?;

        Ok(offers)
    }
}
