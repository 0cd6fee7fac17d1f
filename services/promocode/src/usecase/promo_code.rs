use uuid::Uuid;

use promocode_domain::promo_code_management::PromoCode;

use crate::domain::repository::Repository;
use crate::error::PromoCodeServiceError;

// ── ListPromoCodes ───────────────────────────────────────────────────────────

pub struct ListPromoCodesUseCase<K: Repository<PromoCode>> {
    pub promo_codes: K,
}

impl<K: Repository<PromoCode>> ListPromoCodesUseCase<K> {
    pub async fn execute(&self) -> Result<Vec<PromoCode>, PromoCodeServiceError> {
        self.promo_codes.get_all().await
    }
}

// ── GetPromoCode ─────────────────────────────────────────────────────────────

pub struct GetPromoCodeUseCase<K: Repository<PromoCode>> {
    pub promo_codes: K,
}

impl<K: Repository<PromoCode>> GetPromoCodeUseCase<K> {
    pub async fn execute(&self, id: Uuid) -> Result<PromoCode, PromoCodeServiceError> {
        self.promo_codes
            .get_by_id(id)
            .await?
            .ok_or(PromoCodeServiceError::PromoCodeNotFound)
    }
}
