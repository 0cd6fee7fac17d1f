use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use promocode_core::health::{healthz, readyz};
use promocode_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    customer::{create_customer, delete_customer, edit_customer, get_customer, get_customers},
    employee::{get_employee, get_employees},
    preference::get_preferences,
    promo_code::{get_promo_code, get_promo_codes},
    role::get_roles,
};
use crate::state::AppState;

pub const API_PREFIX: &str = "/api/v1";

fn api_routes() -> Router<AppState> {
    Router::new()
        // Customers
        .route("/customers", get(get_customers).post(create_customer))
        .route(
            "/customers/{id}",
            get(get_customer).put(edit_customer).delete(delete_customer),
        )
        // Preferences
        .route("/preferences", get(get_preferences))
        // Employees
        .route("/employees", get(get_employees))
        .route("/employees/{id}", get(get_employee))
        // Roles
        .route("/roles", get(get_roles))
        // Promo codes
        .route("/promocodes", get(get_promo_codes))
        .route("/promocodes/{id}", get(get_promo_code))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .nest(API_PREFIX, api_routes())
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
