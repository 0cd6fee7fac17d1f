use axum::http::StatusCode;
use serde_json::Value;
use uuid::Uuid;

use promocode_service::domain::repository::Repository;
use promocode_service::infra::seed::{
    CATS_PROMO_CODE_ID, CUSTOMER_ID, FAMILY_PREFERENCE_ID, KIDS_PREFERENCE_ID,
    THEATRE_PREFERENCE_ID, TOYS_PROMO_CODE_ID,
};

use crate::helpers::{TestApp, customer_body, preference_names};

// ── GET /api/v1/customers ────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_customers_with_short_fields() {
    let app = TestApp::seeded();

    let resp = app.client.get("/api/v1/customers").await;

    assert_eq!(resp.status, StatusCode::OK);
    let body: Value = resp.json();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], CUSTOMER_ID.to_string());
    assert_eq!(items[0]["firstName"], "Ivan");
    assert_eq!(items[0]["lastName"], "Petrov");
    assert_eq!(items[0]["email"], "ivan_sergeev@mail.ru");
    assert!(items[0].get("preferences").is_none());
}

// ── GET /api/v1/customers/{id} ───────────────────────────────────────────────

#[tokio::test]
async fn should_return_customer_details_with_preferences_and_promo_codes() {
    let app = TestApp::seeded();

    let resp = app.client.get(&format!("/api/v1/customers/{CUSTOMER_ID}")).await;

    assert_eq!(resp.status, StatusCode::OK);
    let body: Value = resp.json();
    assert_eq!(body["fullName"], "Ivan Petrov");
    assert_eq!(preference_names(&body), vec!["Family", "Theatre"]);

    let codes = body["promoCodes"].as_array().unwrap();
    assert_eq!(codes.len(), 2);
    let toys = codes
        .iter()
        .find(|c| c["id"] == TOYS_PROMO_CODE_ID.to_string())
        .unwrap();
    assert_eq!(toys["code"], "ALLFOR100");
    assert_eq!(toys["partnerName"], "Supertoys");
    assert_eq!(toys["serviceInfo"], "");
    assert_eq!(toys["beginDate"], "09.07.2020 00:00:00");
    assert_eq!(toys["endDate"], "09.08.2020 00:00:00");
}

#[tokio::test]
async fn should_return_404_for_unknown_customer() {
    let app = TestApp::seeded();

    let resp = app
        .client
        .get(&format!("/api/v1/customers/{}", Uuid::new_v4()))
        .await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "CUSTOMER_NOT_FOUND");
}

// ── POST /api/v1/customers ───────────────────────────────────────────────────

#[tokio::test]
async fn should_create_customer_with_requested_preferences() {
    let app = TestApp::seeded();

    let resp = app
        .client
        .post_json(
            "/api/v1/customers",
            &customer_body("Anna", &[THEATRE_PREFERENCE_ID, KIDS_PREFERENCE_ID]),
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    let created: Value = resp.json();
    let id = created["id"].as_str().unwrap().to_owned();

    let resp = app.client.get(&format!("/api/v1/customers/{id}")).await;
    assert_eq!(resp.status, StatusCode::OK);
    let body: Value = resp.json();
    assert_eq!(body["firstName"], "Anna");
    assert_eq!(body["email"], "anna@example.com");
    assert_eq!(preference_names(&body), vec!["Kids", "Theatre"]);
    assert!(body["promoCodes"].as_array().unwrap().is_empty());

    let list: Value = app.client.get("/api/v1/customers").await.json();
    assert_eq!(list.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn should_reject_create_with_unknown_preference() {
    let app = TestApp::seeded();

    let resp = app
        .client
        .post_json(
            "/api/v1/customers",
            &customer_body("Anna", &[THEATRE_PREFERENCE_ID, Uuid::new_v4()]),
        )
        .await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "PREFERENCE_NOT_FOUND");
    assert_eq!(app.state.customers.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn should_create_customer_without_preferences_when_ids_omitted() {
    let app = TestApp::seeded();

    let resp = app
        .client
        .post_json(
            "/api/v1/customers",
            &serde_json::json!({
                "firstName": "Oleg",
                "lastName": "Ivanov",
                "email": "oleg@example.com",
            }),
        )
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    let id = resp.json::<Value>()["id"].as_str().unwrap().to_owned();
    let body: Value = app.client.get(&format!("/api/v1/customers/{id}")).await.json();
    assert!(body["preferences"].as_array().unwrap().is_empty());
}

// ── PUT /api/v1/customers/{id} ───────────────────────────────────────────────

#[tokio::test]
async fn should_edit_customer_and_replace_preferences() {
    let app = TestApp::seeded();

    let resp = app
        .client
        .put_json(
            &format!("/api/v1/customers/{CUSTOMER_ID}"),
            &customer_body("Maria", &[KIDS_PREFERENCE_ID]),
        )
        .await;
    assert_eq!(resp.status, StatusCode::NO_CONTENT);
    assert!(resp.is_empty());

    let body: Value = app
        .client
        .get(&format!("/api/v1/customers/{CUSTOMER_ID}"))
        .await
        .json();
    assert_eq!(body["firstName"], "Maria");
    assert_eq!(body["lastName"], "Smirnova");
    assert_eq!(body["fullName"], "Maria Smirnova");
    assert_eq!(preference_names(&body), vec!["Kids"]);
    assert_eq!(body["promoCodes"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn should_leave_preferences_unchanged_when_edit_has_unknown_preference() {
    let app = TestApp::seeded();

    let resp = app
        .client
        .put_json(
            &format!("/api/v1/customers/{CUSTOMER_ID}"),
            &customer_body("Maria", &[FAMILY_PREFERENCE_ID, Uuid::new_v4()]),
        )
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);

    let body: Value = app
        .client
        .get(&format!("/api/v1/customers/{CUSTOMER_ID}"))
        .await
        .json();
    assert_eq!(body["firstName"], "Ivan");
    assert_eq!(preference_names(&body), vec!["Family", "Theatre"]);
}

#[tokio::test]
async fn should_fail_with_500_when_editing_unknown_customer() {
    let app = TestApp::seeded();

    let resp = app
        .client
        .put_json(
            &format!("/api/v1/customers/{}", Uuid::new_v4()),
            &customer_body("Maria", &[KIDS_PREFERENCE_ID]),
        )
        .await;

    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "INTERNAL");
}

#[tokio::test]
async fn should_prefer_bad_request_over_unknown_customer_on_edit() {
    let app = TestApp::seeded();

    let resp = app
        .client
        .put_json(
            &format!("/api/v1/customers/{}", Uuid::new_v4()),
            &customer_body("Maria", &[Uuid::new_v4()]),
        )
        .await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

// ── DELETE /api/v1/customers/{id} ────────────────────────────────────────────

#[tokio::test]
async fn should_delete_customer_and_cascade_to_promo_codes() {
    let app = TestApp::seeded();

    let resp = app
        .client
        .delete(&format!("/api/v1/customers/{CUSTOMER_ID}"))
        .await;
    assert_eq!(resp.status, StatusCode::NO_CONTENT);

    let resp = app
        .client
        .get(&format!("/api/v1/customers/{CUSTOMER_ID}"))
        .await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);

    for code_id in [TOYS_PROMO_CODE_ID, CATS_PROMO_CODE_ID] {
        let resp = app.client.get(&format!("/api/v1/promocodes/{code_id}")).await;
        assert_eq!(resp.status, StatusCode::NOT_FOUND, "promo code {code_id}");
    }
    assert!(
        app.state
            .customer_preferences
            .get_where(|l| l.customer_id == CUSTOMER_ID)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn should_return_404_when_deleting_unknown_customer() {
    let app = TestApp::seeded();

    let resp = app
        .client
        .delete(&format!("/api/v1/customers/{}", Uuid::new_v4()))
        .await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    let codes: Value = app.client.get("/api/v1/promocodes").await.json();
    assert_eq!(codes.as_array().unwrap().len(), 2);
}

// ── Isolation ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_not_share_state_between_apps() {
    let first = TestApp::seeded();
    let second = TestApp::seeded();

    first
        .client
        .delete(&format!("/api/v1/customers/{CUSTOMER_ID}"))
        .await;

    let resp = second
        .client
        .get(&format!("/api/v1/customers/{CUSTOMER_ID}"))
        .await;
    assert_eq!(resp.status, StatusCode::OK);
}
