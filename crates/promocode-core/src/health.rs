use axum::http::StatusCode;

/// Handler for `GET /healthz`: liveness check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz`. The in-memory store is ready as soon as it is
/// seeded, which happens before the listener binds.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
