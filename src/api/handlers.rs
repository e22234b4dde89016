//! HTTP request handlers for the Credit Eligibility Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::scoring::{evaluate, monthly_installment};
use crate::store::{CreditStore, NewLoan};

use super::request::{LoanApplicationRequest, RegisterCustomerRequest};
use super::response::{
    ApiError, ApiErrorResponse, CreateLoanResponse, CustomerLoanResponse, EligibilityResponse,
    RegisterCustomerResponse, ViewLoanResponse,
};
use super::state::AppState;

const APPROVED_MESSAGE: &str =
    "Congratulations, your loan is approved. Thank you for using our services.";
const REJECTED_MESSAGE: &str =
    "Dear customer, Unfortunately we couldn't approve the loan of your current demand.";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/register", post(register_handler))
        .route("/check-eligibility", post(check_eligibility_handler))
        .route("/create-loan", post(create_loan_handler))
        .route("/view-loan/:loan_id", get(view_loan_handler))
        .route("/view-loans/:customer_id", get(view_customer_loans_handler))
        .with_state(state)
}

/// Turns a JSON extraction rejection into a 400 response with a coded body.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

/// Handler for POST /register.
///
/// Validates the registration data, fixes the approved credit limit from the
/// monthly salary, and persists the new customer.
async fn register_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegisterCustomerRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    info!(correlation_id = %correlation_id, "Processing customer registration");

    match state.store().create_customer(request.into()) {
        Ok(customer) => {
            info!(
                correlation_id = %correlation_id,
                customer_id = customer.customer_id,
                approved_limit = customer.approved_limit,
                "Customer registered"
            );
            (
                StatusCode::CREATED,
                Json(RegisterCustomerResponse::from(customer)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Registration failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /check-eligibility.
///
/// Runs the scoring engine for the applying customer and reports the
/// decision without persisting anything.
async fn check_eligibility_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoanApplicationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    info!(
        correlation_id = %correlation_id,
        customer_id = request.customer_id,
        "Processing eligibility check"
    );

    match evaluate(state.store(), request.customer_id, state.reference_date()) {
        Ok(evaluation) => {
            info!(
                correlation_id = %correlation_id,
                customer_id = request.customer_id,
                approved = evaluation.approved,
                credit_score = %evaluation.credit_score,
                "Eligibility check completed"
            );
            let response = EligibilityResponse {
                customer_id: request.customer_id,
                approval: evaluation.approved,
                interest_rate: evaluation.interest_rate,
                corrected_interest_rate: evaluation.corrected_interest_rate,
                tenure: request.tenure,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Eligibility check failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /create-loan.
///
/// Runs the scoring engine as a gate: rejected applications get a 200 with
/// no loan record, approved ones are persisted with the engine's rate and
/// the computed installment and returned with a 201.
async fn create_loan_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoanApplicationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    info!(
        correlation_id = %correlation_id,
        customer_id = request.customer_id,
        loan_amount = %request.loan_amount,
        tenure = request.tenure,
        "Processing loan application"
    );

    match process_loan_application(state.store(), &request, state.reference_date()) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                customer_id = response.customer_id,
                loan_approved = response.loan_approved,
                loan_id = response.loan_id,
                "Loan application processed"
            );
            let status = if response.loan_approved {
                StatusCode::CREATED
            } else {
                StatusCode::OK
            };
            (status, Json(response)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Loan application failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Gates a loan application through the engine and persists it if approved.
fn process_loan_application(
    store: &dyn CreditStore,
    request: &LoanApplicationRequest,
    as_of: NaiveDate,
) -> EngineResult<CreateLoanResponse> {
    if request.loan_amount <= Decimal::ZERO {
        return Err(EngineError::InvalidLoanTerms {
            field: "loan_amount".to_string(),
            message: "must be positive".to_string(),
        });
    }

    let evaluation = evaluate(store, request.customer_id, as_of)?;
    if !evaluation.approved {
        return Ok(CreateLoanResponse {
            loan_id: None,
            customer_id: request.customer_id,
            loan_approved: false,
            message: REJECTED_MESSAGE.to_string(),
            monthly_installment: Decimal::ZERO,
            loan_amount: None,
            interest_rate: None,
            tenure: None,
        });
    }

    // The engine's corrected rate is what gets charged, not the rate the
    // customer asked for.
    let rate = evaluation.corrected_interest_rate;
    let emi = monthly_installment(request.loan_amount, rate, request.tenure)?;
    let end_date = as_of
        .checked_add_months(Months::new(request.tenure))
        .ok_or_else(|| EngineError::InvalidLoanTerms {
            field: "tenure".to_string(),
            message: "end date out of range".to_string(),
        })?;

    let loan = store.create_loan(NewLoan {
        customer_id: request.customer_id,
        loan_amount: request.loan_amount,
        tenure: request.tenure,
        interest_rate: rate,
        emi_monthly_repayment: emi,
        emi_paid_on_time: 0,
        start_date: as_of,
        end_date,
    })?;

    Ok(CreateLoanResponse {
        loan_id: Some(loan.loan_id),
        customer_id: loan.customer_id,
        loan_approved: true,
        message: APPROVED_MESSAGE.to_string(),
        monthly_installment: loan.emi_monthly_repayment,
        loan_amount: Some(loan.loan_amount),
        interest_rate: Some(loan.interest_rate),
        tenure: Some(loan.tenure),
    })
}

/// Handler for GET /view-loan/{loan_id}.
async fn view_loan_handler(
    State(state): State<AppState>,
    Path(loan_id): Path<u64>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let result = state.store().get_loan(loan_id).and_then(|loan| {
        let customer = state.store().get_customer(loan.customer_id)?;
        Ok(ViewLoanResponse::new(&loan, &customer))
    });

    match result {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, loan_id, error = %err, "Loan view failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /view-loans/{customer_id}.
async fn view_customer_loans_handler(
    State(state): State<AppState>,
    Path(customer_id): Path<u64>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    match state.store().list_loans(customer_id) {
        Ok(loans) => {
            let views: Vec<CustomerLoanResponse> =
                loans.iter().map(CustomerLoanResponse::from).collect();
            (StatusCode::OK, Json(views)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                customer_id,
                error = %err,
                "Customer loans view failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
