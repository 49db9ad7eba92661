use sqlx::PgPool;

use crate::dto::offer_dto::OfferResponse;
use crate::repositories::offer_repository::OfferRepository;
use crate::utils::errors::AppError;

pub struct OfferController {
    repository: OfferRepository,
}

impl OfferController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: OfferRepository::new(pool),
        }
    }

    /// Ofertas activas para la portada
    pub async fn list_active(&self) -> Result<Vec<OfferResponse>, AppError> {
        let offers = self.repository.find_active().await?;
        Ok(offers.into_iter().map(Into::into).collect())
    }
}
