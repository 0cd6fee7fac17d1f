use axum::{
    Json,
    extract::{Path, State},
};
use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

use promocode_domain::promo_code_management::PromoCode;

use crate::error::PromoCodeServiceError;
use crate::state::AppState;
use crate::usecase::promo_code::{GetPromoCodeUseCase, ListPromoCodesUseCase};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoCodeShortResponse {
    pub id: Uuid,
    pub code: String,
    pub service_info: String,
    #[serde(serialize_with = "promocode_core::serde::to_display_datetime")]
    pub begin_date: NaiveDateTime,
    #[serde(serialize_with = "promocode_core::serde::to_display_datetime")]
    pub end_date: NaiveDateTime,
    pub partner_name: String,
}

impl From<PromoCode> for PromoCodeShortResponse {
    fn from(code: PromoCode) -> Self {
        Self {
            id: code.id,
            code: code.code,
            service_info: code.service_info,
            begin_date: code.begin_date,
            end_date: code.end_date,
            partner_name: code.partner_name,
        }
    }
}

// ── GET /api/v1/promocodes ───────────────────────────────────────────────────

pub async fn get_promo_codes(
    State(state): State<AppState>,
) -> Result<Json<Vec<PromoCodeShortResponse>>, PromoCodeServiceError> {
    let usecase = ListPromoCodesUseCase {
        promo_codes: state.promo_code_repo(),
    };
    let codes = usecase.execute().await?;
    Ok(Json(codes.into_iter().map(Into::into).collect()))
}

// ── GET /api/v1/promocodes/{id} ──────────────────────────────────────────────

pub async fn get_promo_code(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PromoCodeShortResponse>, PromoCodeServiceError> {
    let usecase = GetPromoCodeUseCase {
        promo_codes: state.promo_code_repo(),
    };
    let code = usecase.execute(id).await?;
    Ok(Json(code.into()))
}
