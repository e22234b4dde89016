//! Request types for the Credit Eligibility Engine API.
//!
//! This module defines the JSON request structures for the registration and
//! loan endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::store::NewCustomer;

/// Request body for the `POST /register` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterCustomerRequest {
    /// The customer's first name.
    pub first_name: String,
    /// The customer's last name.
    pub last_name: String,
    /// The customer's age in years.
    pub age: u32,
    /// The customer's phone number.
    pub phone_number: u64,
    /// Monthly salary in integer currency units.
    pub monthly_salary: i64,
}

/// Request body for the `POST /check-eligibility` and `POST /create-loan`
/// endpoints: a loan application to evaluate against the customer's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanApplicationRequest {
    /// The applying customer.
    pub customer_id: u64,
    /// The requested principal amount.
    pub loan_amount: Decimal,
    /// The requested annual interest rate in percent. Advisory only: the
    /// engine decides the rate actually offered.
    pub interest_rate: Decimal,
    /// The requested tenure in months.
    pub tenure: u32,
}

impl From<RegisterCustomerRequest> for NewCustomer {
    fn from(req: RegisterCustomerRequest) -> Self {
        NewCustomer {
            first_name: req.first_name,
            last_name: req.last_name,
            age: req.age,
            phone_number: req.phone_number,
            monthly_salary: req.monthly_salary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_register_request() {
        let json = r#"{
            "first_name": "abcd",
            "last_name": "defg",
            "age": 24,
            "phone_number": 1234567890,
            "monthly_salary": 38000
        }"#;

        let request: RegisterCustomerRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.first_name, "abcd");
        assert_eq!(request.monthly_salary, 38000);
    }

    #[test]
    fn test_deserialize_loan_application() {
        let json = r#"{
            "customer_id": 16,
            "loan_amount": 200000,
            "interest_rate": 8,
            "tenure": 14
        }"#;

        let request: LoanApplicationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.customer_id, 16);
        assert_eq!(request.loan_amount, Decimal::from(200000));
        assert_eq!(request.tenure, 14);
    }

    #[test]
    fn test_register_request_converts_to_new_customer() {
        let request = RegisterCustomerRequest {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            age: 30,
            phone_number: 1234567890,
            monthly_salary: 50000,
        };

        let new: NewCustomer = request.into();
        assert_eq!(new.first_name, "John");
        assert_eq!(new.monthly_salary, 50000);
    }
}
