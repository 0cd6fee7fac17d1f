use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PromoCodeServiceError;
use crate::handlers::preference::PreferenceResponse;
use crate::handlers::promo_code::PromoCodeShortResponse;
use crate::state::AppState;
use crate::usecase::customer::{
    CreateCustomerUseCase, CustomerInput, DeleteCustomerUseCase, EditCustomerUseCase,
    GetCustomerUseCase, ListCustomersUseCase,
};

// ── Request types ────────────────────────────────────────────────────────────

/// Body shared by `POST` and `PUT`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrEditCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub preference_ids: Vec<Uuid>,
}

impl From<CreateOrEditCustomerRequest> for CustomerInput {
    fn from(body: CreateOrEditCustomerRequest) -> Self {
        Self {
            first_name: body.first_name,
            last_name: body.last_name,
            email: body.email,
            preference_ids: body.preference_ids,
        }
    }
}

// ── GET /api/v1/customers ────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerShortResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

pub async fn get_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerShortResponse>>, PromoCodeServiceError> {
    let usecase = ListCustomersUseCase {
        customers: state.customer_repo(),
    };
    let customers = usecase.execute().await?;
    let items = customers
        .into_iter()
        .map(|c| CustomerShortResponse {
            id: c.id,
            email: c.email,
            first_name: c.first_name,
            last_name: c.last_name,
        })
        .collect();
    Ok(Json(items))
}

// ── GET /api/v1/customers/{id} ───────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub preferences: Vec<PreferenceResponse>,
    pub promo_codes: Vec<PromoCodeShortResponse>,
}

pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CustomerResponse>, PromoCodeServiceError> {
    let usecase = GetCustomerUseCase {
        customers: state.customer_repo(),
        preferences: state.preference_repo(),
        links: state.customer_preference_repo(),
        promo_codes: state.promo_code_repo(),
    };
    let details = usecase.execute(id).await?;
    let customer = details.customer;
    Ok(Json(CustomerResponse {
        id: customer.id,
        full_name: customer.full_name(),
        first_name: customer.first_name,
        last_name: customer.last_name,
        email: customer.email,
        preferences: details.preferences.into_iter().map(Into::into).collect(),
        promo_codes: details.promo_codes.into_iter().map(Into::into).collect(),
    }))
}

// ── POST /api/v1/customers ───────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CreatedCustomerResponse {
    pub id: Uuid,
}

pub async fn create_customer(
    State(state): State<AppState>,
    Json(body): Json<CreateOrEditCustomerRequest>,
) -> Result<Json<CreatedCustomerResponse>, PromoCodeServiceError> {
    let usecase = CreateCustomerUseCase {
        customers: state.customer_repo(),
        preferences: state.preference_repo(),
        links: state.customer_preference_repo(),
    };
    let id = usecase.execute(body.into()).await?;
    Ok(Json(CreatedCustomerResponse { id }))
}

// ── PUT /api/v1/customers/{id} ───────────────────────────────────────────────

pub async fn edit_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<CreateOrEditCustomerRequest>,
) -> Result<StatusCode, PromoCodeServiceError> {
    let usecase = EditCustomerUseCase {
        customers: state.customer_repo(),
        preferences: state.preference_repo(),
        links: state.customer_preference_repo(),
    };
    usecase.execute(id, body.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /api/v1/customers/{id} ────────────────────────────────────────────

pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, PromoCodeServiceError> {
    let usecase = DeleteCustomerUseCase {
        customers: state.customer_repo(),
        links: state.customer_preference_repo(),
        promo_codes: state.promo_code_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
