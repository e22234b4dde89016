//! End-to-end tests for the Credit Eligibility Engine API.
//!
//! This suite drives the full router: customer registration, eligibility
//! checks against seeded loan histories, loan creation gating, record
//! views, and error cases.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use credit_engine::api::{AppState, create_router};
use credit_engine::scoring::monthly_installment;
use credit_engine::store::{CreditStore, MemoryStore, NewCustomer, NewLoan};

// =============================================================================
// Test Helpers
// =============================================================================

/// All evaluations in this suite run as of this date.
fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn create_test_state() -> AppState {
    AppState::with_reference_date(MemoryStore::new(), as_of())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn register_customer(state: &AppState, monthly_salary: i64) -> u64 {
    state
        .store()
        .create_customer(NewCustomer {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            age: 30,
            phone_number: 1234567890,
            monthly_salary,
        })
        .expect("Failed to seed customer")
        .customer_id
}

fn seed_loan(
    state: &AppState,
    customer_id: u64,
    amount: i64,
    tenure: u32,
    paid_on_time: u32,
    start: NaiveDate,
    end: NaiveDate,
    emi: &str,
) -> u64 {
    state
        .store()
        .create_loan(NewLoan {
            customer_id,
            loan_amount: Decimal::from(amount),
            tenure,
            interest_rate: Decimal::from(8),
            emi_monthly_repayment: decimal(emi),
            emi_paid_on_time: paid_on_time,
            start_date: start,
            end_date: end,
        })
        .expect("Failed to seed loan")
        .loan_id
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn application(customer_id: u64) -> Value {
    json!({
        "customer_id": customer_id,
        "loan_amount": 200000,
        "interest_rate": 8,
        "tenure": 14
    })
}

fn body_decimal(value: &Value) -> Decimal {
    decimal(value.as_str().expect("expected a decimal string"))
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn test_registration_fixes_limit_at_36x_salary() {
    let router = create_router(create_test_state());

    let (status, body) = post_json(
        router,
        "/register",
        json!({
            "first_name": "abcd",
            "last_name": "defg",
            "age": 24,
            "phone_number": 1234567890u64,
            "monthly_salary": 38000
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["approved_limit"], 1368000);
    assert_eq!(body["name"], "abcd defg");
    assert_eq!(body["monthly_salary"], 38000);
    assert_eq!(body["age"], 24);
}

// =============================================================================
// Eligibility
// =============================================================================

#[tokio::test]
async fn test_customer_with_no_history_is_approved_at_8() {
    let state = create_test_state();
    let customer_id = register_customer(&state, 50000);
    let router = create_router(state);

    let (status, body) = post_json(router, "/check-eligibility", application(customer_id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["approval"], true);
    assert_eq!(body_decimal(&body["interest_rate"]), Decimal::from(8));
    assert_eq!(
        body_decimal(&body["corrected_interest_rate"]),
        Decimal::from(8)
    );
}

#[tokio::test]
async fn test_clean_single_loan_history_is_approved_at_8() {
    let state = create_test_state();
    let customer_id = register_customer(&state, 50000);
    // One loan, fully paid on time, long finished, no loans this year and a
    // small slice of the limit: the best score a one-loan history can reach.
    seed_loan(
        &state,
        customer_id,
        100000,
        12,
        12,
        date(2020, 1, 1),
        date(2021, 1, 1),
        "9000",
    );
    let router = create_router(state);

    let (status, body) = post_json(router, "/check-eligibility", application(customer_id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["approval"], true);
    assert_eq!(body_decimal(&body["interest_rate"]), Decimal::from(8));
}

#[tokio::test]
async fn test_emi_burden_rejects_regardless_of_clean_history() {
    let state = create_test_state();
    let customer_id = register_customer(&state, 50000);
    // Spotless repayment record, but the active EMI exceeds half the salary.
    seed_loan(
        &state,
        customer_id,
        100000,
        12,
        12,
        date(2020, 1, 1),
        date(2021, 1, 1),
        "9000",
    );
    seed_loan(
        &state,
        customer_id,
        300000,
        24,
        6,
        date(2024, 1, 1),
        date(2026, 1, 1),
        "26000",
    );
    let router = create_router(state);

    let (status, body) = post_json(router, "/check-eligibility", application(customer_id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["approval"], false);
    assert_eq!(body_decimal(&body["interest_rate"]), Decimal::ZERO);
}

#[tokio::test]
async fn test_exhausted_limit_rejects() {
    let state = create_test_state();
    let customer_id = register_customer(&state, 50000);
    // Principal sum equals the 1,800,000 approved limit.
    seed_loan(
        &state,
        customer_id,
        1800000,
        120,
        120,
        date(2013, 1, 1),
        date(2023, 1, 1),
        "20000",
    );
    let router = create_router(state);

    let (status, body) = post_json(router, "/check-eligibility", application(customer_id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["approval"], false);
    assert_eq!(body_decimal(&body["interest_rate"]), Decimal::ZERO);
}

#[tokio::test]
async fn test_eligibility_unknown_customer_is_404() {
    let router = create_router(create_test_state());

    let (status, body) = post_json(router, "/check-eligibility", application(999)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "CUSTOMER_NOT_FOUND");
}

// =============================================================================
// Loan creation
// =============================================================================

#[tokio::test]
async fn test_create_loan_installment_matches_reference_value() {
    let state = create_test_state();
    let customer_id = register_customer(&state, 50000);
    let router = create_router(state);

    let (status, body) = post_json(router, "/create-loan", application(customer_id)).await;

    assert_eq!(status, StatusCode::CREATED);
    let emi = body_decimal(&body["monthly_installment"]);
    let expected = decimal("15428.571428571429");
    assert!(
        (emi - expected).abs() < Decimal::new(1, 6),
        "expected ~{}, got {}",
        expected,
        emi
    );
}

#[tokio::test]
async fn test_created_loan_round_trips_rate_and_installment() {
    let state = create_test_state();
    let customer_id = register_customer(&state, 50000);
    let router = create_router(state.clone());

    // The eligibility check that gates the application.
    let (_, eligibility) = post_json(
        router.clone(),
        "/check-eligibility",
        application(customer_id),
    )
    .await;
    let gated_rate = body_decimal(&eligibility["interest_rate"]);

    let (status, created) = post_json(router.clone(), "/create-loan", application(customer_id)).await;
    assert_eq!(status, StatusCode::CREATED);
    let loan_id = created["loan_id"].as_u64().unwrap();

    // The persisted record carries exactly the gated rate and the computed
    // installment for it.
    let persisted = state.store().get_loan(loan_id).unwrap();
    assert_eq!(persisted.interest_rate, gated_rate);
    assert_eq!(
        persisted.emi_monthly_repayment,
        monthly_installment(persisted.loan_amount, gated_rate, persisted.tenure).unwrap()
    );
    assert_eq!(persisted.emi_paid_on_time, 0);
    assert_eq!(persisted.start_date, as_of());
    assert_eq!(persisted.end_date, date(2025, 8, 1));

    // And the view endpoint reports the same numbers.
    let (view_status, view) = get_json(router, &format!("/view-loan/{}", loan_id)).await;
    assert_eq!(view_status, StatusCode::OK);
    assert_eq!(body_decimal(&view["interest_rate"]), gated_rate);
    assert_eq!(
        body_decimal(&view["monthly_installment"]),
        persisted.emi_monthly_repayment
    );
}

#[tokio::test]
async fn test_rejected_application_creates_no_loan() {
    let state = create_test_state();
    let customer_id = register_customer(&state, 50000);
    seed_loan(
        &state,
        customer_id,
        300000,
        24,
        6,
        date(2024, 1, 1),
        date(2026, 1, 1),
        "26000",
    );
    let router = create_router(state.clone());

    let (status, body) = post_json(router, "/create-loan", application(customer_id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["loan_approved"], false);
    assert_eq!(body["loan_id"], Value::Null);
    assert_eq!(body_decimal(&body["monthly_installment"]), Decimal::ZERO);

    // Only the seeded loan is on record.
    assert_eq!(state.store().list_loans(customer_id).unwrap().len(), 1);
}

// =============================================================================
// Record views
// =============================================================================

#[tokio::test]
async fn test_view_loan_embeds_customer_summary() {
    let state = create_test_state();
    let customer_id = register_customer(&state, 50000);
    let loan_id = seed_loan(
        &state,
        customer_id,
        200000,
        14,
        4,
        date(2022, 10, 11),
        date(2024, 10, 11),
        "15428.57",
    );
    let router = create_router(state);

    let (status, body) = get_json(router, &format!("/view-loan/{}", loan_id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["loan_id"].as_u64().unwrap(), loan_id);
    assert_eq!(body_decimal(&body["loan_amount"]), Decimal::from(200000));
    assert_eq!(body["tenure"], 14);
    assert_eq!(body["customer"]["first_name"], "John");
    assert_eq!(body["customer"]["last_name"], "Doe");
    assert_eq!(body["customer"]["age"], 30);
    assert_eq!(body["customer"]["phone_number"].as_u64().unwrap(), 1234567890);
}

#[tokio::test]
async fn test_view_customer_loans_reports_repayments_left() {
    let state = create_test_state();
    let customer_id = register_customer(&state, 50000);
    seed_loan(
        &state,
        customer_id,
        200000,
        14,
        4,
        date(2022, 10, 11),
        date(2024, 10, 11),
        "15428.57",
    );
    let router = create_router(state);

    let (status, body) = get_json(router, &format!("/view-loans/{}", customer_id)).await;

    assert_eq!(status, StatusCode::OK);
    let loans = body.as_array().unwrap();
    assert_eq!(loans.len(), 1);
    assert_eq!(loans[0]["repayments_left"], 10);
    assert_eq!(
        body_decimal(&loans[0]["monthly_installment"]),
        decimal("15428.57")
    );
}

#[tokio::test]
async fn test_view_unknown_loan_is_404() {
    let router = create_router(create_test_state());

    let (status, body) = get_json(router, "/view-loan/10004").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "LOAN_NOT_FOUND");
}
