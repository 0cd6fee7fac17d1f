use axum::http::StatusCode;
use serde_json::Value;
use uuid::Uuid;

use promocode_service::infra::seed::{
    ADMIN_ROLE_ID, CATS_PROMO_CODE_ID, OWNER_EMPLOYEE_ID, THEATRE_PREFERENCE_ID,
};

use crate::helpers::TestApp;

#[tokio::test]
async fn should_answer_health_probes() {
    let app = TestApp::seeded();
    assert_eq!(app.client.get("/healthz").await.status, StatusCode::OK);
    assert_eq!(app.client.get("/readyz").await.status, StatusCode::OK);
}

#[tokio::test]
async fn should_attach_request_id_to_responses() {
    let app = TestApp::seeded();
    let resp = app.client.get("/api/v1/preferences").await;
    let id = resp.headers.get("x-request-id").unwrap().to_str().unwrap();
    assert!(Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn should_list_preferences() {
    let app = TestApp::seeded();

    let resp = app.client.get("/api/v1/preferences").await;

    assert_eq!(resp.status, StatusCode::OK);
    let body: Value = resp.json();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["id"], THEATRE_PREFERENCE_ID.to_string());
    assert_eq!(items[0]["name"], "Theatre");
}

#[tokio::test]
async fn should_list_roles() {
    let app = TestApp::seeded();

    let body: Value = app.client.get("/api/v1/roles").await.json();

    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], ADMIN_ROLE_ID.to_string());
    assert_eq!(items[0]["name"], "Admin");
    assert_eq!(items[0]["description"], "Administrator");
}

#[tokio::test]
async fn should_list_employees_with_full_names() {
    let app = TestApp::seeded();

    let body: Value = app.client.get("/api/v1/employees").await.json();

    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["fullName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ivan Sergeev", "Petr Andreev"]);
}

#[tokio::test]
async fn should_return_employee_with_role() {
    let app = TestApp::seeded();

    let resp = app
        .client
        .get(&format!("/api/v1/employees/{OWNER_EMPLOYEE_ID}"))
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    let body: Value = resp.json();
    assert_eq!(body["email"], "owner@somemail.ru");
    assert_eq!(body["role"]["name"], "Admin");
    assert_eq!(body["appliedPromocodesCount"], 5);
}

#[tokio::test]
async fn should_return_404_for_unknown_employee() {
    let app = TestApp::seeded();
    let resp = app
        .client
        .get(&format!("/api/v1/employees/{}", Uuid::new_v4()))
        .await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.json::<Value>()["kind"], "EMPLOYEE_NOT_FOUND");
}

#[tokio::test]
async fn should_return_promo_code_by_id() {
    let app = TestApp::seeded();

    let resp = app
        .client
        .get(&format!("/api/v1/promocodes/{CATS_PROMO_CODE_ID}"))
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    let body: Value = resp.json();
    assert_eq!(body["code"], "PROMO 200");
    assert_eq!(body["beginDate"], "09.08.2020 00:00:00");
    assert_eq!(body["endDate"], "09.09.2020 00:00:00");
}

#[tokio::test]
async fn should_reject_malformed_path_id() {
    let app = TestApp::seeded();
    let resp = app.client.get("/api/v1/customers/not-a-uuid").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}
