use axum::{Json, extract::State};
use serde::Serialize;
use uuid::Uuid;

use promocode_domain::promo_code_management::Preference;

use crate::error::PromoCodeServiceError;
use crate::state::AppState;
use crate::usecase::preference::ListPreferencesUseCase;

#[derive(Serialize)]
pub struct PreferenceResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<Preference> for PreferenceResponse {
    fn from(preference: Preference) -> Self {
        Self {
            id: preference.id,
            name: preference.name,
        }
    }
}

// ── GET /api/v1/preferences ──────────────────────────────────────────────────

pub async fn get_preferences(
    State(state): State<AppState>,
) -> Result<Json<Vec<PreferenceResponse>>, PromoCodeServiceError> {
    let usecase = ListPreferencesUseCase {
        preferences: state.preference_repo(),
    };
    let preferences = usecase.execute().await?;
    Ok(Json(preferences.into_iter().map(Into::into).collect()))
}
