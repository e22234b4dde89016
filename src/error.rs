//! Error types for the Credit Eligibility Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during credit evaluation and
//! record access.

use thiserror::Error;

/// The main error type for the Credit Eligibility Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use credit_engine::error::EngineError;
///
/// let error = EngineError::CustomerNotFound { customer_id: 42 };
/// assert_eq!(error.to_string(), "Customer not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No customer exists with the given identifier.
    #[error("Customer not found: {customer_id}")]
    CustomerNotFound {
        /// The customer identifier that was not found.
        customer_id: u64,
    },

    /// No loan exists with the given identifier.
    #[error("Loan not found: {loan_id}")]
    LoanNotFound {
        /// The loan identifier that was not found.
        loan_id: u64,
    },

    /// A customer field failed validation at registration.
    #[error("Invalid customer field '{field}': {message}")]
    InvalidCustomer {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A loan application field failed validation.
    #[error("Invalid loan field '{field}': {message}")]
    InvalidLoanTerms {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The stored loan history for a customer is internally inconsistent.
    ///
    /// Reaching this indicates a logic violation in the store, not bad
    /// caller input.
    #[error("Inconsistent loan history for customer {customer_id}: {message}")]
    InvalidLoanHistory {
        /// The customer whose history is inconsistent.
        customer_id: u64,
        /// A description of the inconsistency.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
