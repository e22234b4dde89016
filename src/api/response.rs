//! Response types for the Credit Eligibility Engine API.
//!
//! This module defines the success payloads, the error response structures,
//! and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{Customer, Loan};

/// Response body for `POST /register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterCustomerResponse {
    /// The assigned customer identifier.
    pub customer_id: u64,
    /// The customer's full name.
    pub name: String,
    /// The customer's age in years.
    pub age: u32,
    /// Monthly salary in integer currency units.
    pub monthly_salary: i64,
    /// The approved credit limit fixed at registration.
    pub approved_limit: i64,
    /// The customer's phone number.
    pub phone_number: u64,
}

impl From<Customer> for RegisterCustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            customer_id: customer.customer_id,
            name: customer.name(),
            age: customer.age,
            monthly_salary: customer.monthly_salary,
            approved_limit: customer.approved_limit,
            phone_number: customer.phone_number,
        }
    }
}

/// Response body for `POST /check-eligibility`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityResponse {
    /// The evaluated customer.
    pub customer_id: u64,
    /// Whether a new loan would be approved.
    pub approval: bool,
    /// The interest rate the engine would charge.
    pub interest_rate: Decimal,
    /// The corrected interest rate (currently equal to `interest_rate`).
    pub corrected_interest_rate: Decimal,
    /// The requested tenure, echoed back.
    pub tenure: u32,
}

/// Response body for `POST /create-loan`.
///
/// Rejections carry `loan_id: null`, `loan_approved: false`, and a zero
/// installment; the terms fields are omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLoanResponse {
    /// The persisted loan identifier, absent when the application was
    /// rejected.
    pub loan_id: Option<u64>,
    /// The applying customer.
    pub customer_id: u64,
    /// Whether the loan was approved and persisted.
    pub loan_approved: bool,
    /// A customer-facing outcome message.
    pub message: String,
    /// The fixed monthly installment (zero when rejected).
    pub monthly_installment: Decimal,
    /// The persisted principal amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_amount: Option<Decimal>,
    /// The interest rate charged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<Decimal>,
    /// The persisted tenure in months.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenure: Option<u32>,
}

/// Customer fields embedded in a loan view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerSummary {
    /// The customer identifier.
    pub customer_id: u64,
    /// The customer's first name.
    pub first_name: String,
    /// The customer's last name.
    pub last_name: String,
    /// The customer's phone number.
    pub phone_number: u64,
    /// The customer's age in years.
    pub age: u32,
}

impl From<&Customer> for CustomerSummary {
    fn from(customer: &Customer) -> Self {
        Self {
            customer_id: customer.customer_id,
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            phone_number: customer.phone_number,
            age: customer.age,
        }
    }
}

/// Response body for `GET /view-loan/{loan_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewLoanResponse {
    /// The loan identifier.
    pub loan_id: u64,
    /// The customer holding the loan.
    pub customer: CustomerSummary,
    /// The principal amount.
    pub loan_amount: Decimal,
    /// The annual interest rate in percent.
    pub interest_rate: Decimal,
    /// The fixed monthly installment.
    pub monthly_installment: Decimal,
    /// The tenure in months.
    pub tenure: u32,
}

impl ViewLoanResponse {
    /// Builds the view from a loan and its owning customer.
    pub fn new(loan: &Loan, customer: &Customer) -> Self {
        Self {
            loan_id: loan.loan_id,
            customer: customer.into(),
            loan_amount: loan.loan_amount,
            interest_rate: loan.interest_rate,
            monthly_installment: loan.emi_monthly_repayment,
            tenure: loan.tenure,
        }
    }
}

/// One entry in the `GET /view-loans/{customer_id}` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerLoanResponse {
    /// The loan identifier.
    pub loan_id: u64,
    /// The principal amount.
    pub loan_amount: Decimal,
    /// The annual interest rate in percent.
    pub interest_rate: Decimal,
    /// The fixed monthly installment.
    pub monthly_installment: Decimal,
    /// Installments still owed.
    pub repayments_left: u32,
}

impl From<&Loan> for CustomerLoanResponse {
    fn from(loan: &Loan) -> Self {
        Self {
            loan_id: loan.loan_id,
            loan_amount: loan.loan_amount,
            interest_rate: loan.interest_rate,
            monthly_installment: loan.emi_monthly_repayment,
            repayments_left: loan.repayments_left(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::CustomerNotFound { customer_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "CUSTOMER_NOT_FOUND",
                    format!("Customer not found: {}", customer_id),
                    "No customer is registered under this identifier",
                ),
            },
            EngineError::LoanNotFound { loan_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "LOAN_NOT_FOUND",
                    format!("Loan not found: {}", loan_id),
                    "No loan exists under this identifier",
                ),
            },
            EngineError::InvalidCustomer { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_CUSTOMER",
                    format!("Invalid customer field '{}': {}", field, message),
                    "The registration data contains invalid information",
                ),
            },
            EngineError::InvalidLoanTerms { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_LOAN_TERMS",
                    format!("Invalid loan field '{}': {}", field, message),
                    "The loan application contains invalid information",
                ),
            },
            EngineError::InvalidLoanHistory {
                customer_id,
                message,
            } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "INVALID_LOAN_HISTORY",
                    "Stored loan history is inconsistent",
                    format!("customer {}: {}", customer_id, message),
                ),
            },
        }
    }
}
