use promocode_domain::promo_code_management::Preference;

use crate::domain::repository::Repository;
use crate::error::PromoCodeServiceError;

pub struct ListPreferencesUseCase<P: Repository<Preference>> {
    pub preferences: P,
}

impl<P: Repository<Preference>> ListPreferencesUseCase<P> {
    pub async fn execute(&self) -> Result<Vec<Preference>, PromoCodeServiceError> {
        self.preferences.get_all().await
    }
}
