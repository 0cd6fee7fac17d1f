use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Promo code service error variants.
#[derive(Debug, thiserror::Error)]
pub enum PromoCodeServiceError {
    #[error("customer not found")]
    CustomerNotFound,
    #[error("employee not found")]
    EmployeeNotFound,
    #[error("promo code not found")]
    PromoCodeNotFound,
    #[error("preference not found")]
    PreferenceNotFound,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl PromoCodeServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CustomerNotFound => "CUSTOMER_NOT_FOUND",
            Self::EmployeeNotFound => "EMPLOYEE_NOT_FOUND",
            Self::PromoCodeNotFound => "PROMO_CODE_NOT_FOUND",
            Self::PreferenceNotFound => "PREFERENCE_NOT_FOUND",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for PromoCodeServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::CustomerNotFound | Self::EmployeeNotFound | Self::PromoCodeNotFound => {
                StatusCode::NOT_FOUND
            }
            // An unknown preference id is a malformed request, not a missing resource.
            Self::PreferenceNotFound => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
