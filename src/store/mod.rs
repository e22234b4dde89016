//! Customer/loan record store.
//!
//! The engine treats persistence as an external collaborator behind the
//! [`CreditStore`] trait: standard create/read/filter operations reachable
//! synchronously. The bundled [`MemoryStore`] backs the API and tests;
//! swapping in a real database means implementing the trait, nothing more.

mod memory;

pub use memory::MemoryStore;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{Customer, Loan};

/// A customer to be registered, before an id is assigned.
///
/// The store derives the approved limit from the salary at creation; the
/// limit is fixed for the life of the record.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    /// The customer's first name.
    pub first_name: String,
    /// The customer's last name.
    pub last_name: String,
    /// The customer's age in years.
    pub age: u32,
    /// The customer's phone number.
    pub phone_number: u64,
    /// Monthly salary in integer currency units; must be positive.
    pub monthly_salary: i64,
}

/// A loan to be persisted, before an id is assigned.
#[derive(Debug, Clone)]
pub struct NewLoan {
    /// The customer who holds the loan.
    pub customer_id: u64,
    /// The principal amount.
    pub loan_amount: Decimal,
    /// Loan duration in months.
    pub tenure: u32,
    /// Annual interest rate in percent.
    pub interest_rate: Decimal,
    /// Fixed monthly repayment amount.
    pub emi_monthly_repayment: Decimal,
    /// Installments paid on schedule so far.
    pub emi_paid_on_time: u32,
    /// The date the loan starts.
    pub start_date: NaiveDate,
    /// The date the loan ends.
    pub end_date: NaiveDate,
}

/// The data-store collaborator the engine reads from and the request
/// handlers write through.
pub trait CreditStore: Send + Sync {
    /// Fetches a customer by id.
    fn get_customer(&self, customer_id: u64) -> EngineResult<Customer>;

    /// Lists all loans held by a customer, in no particular order.
    ///
    /// Fails with `CustomerNotFound` for an unknown customer.
    fn list_loans(&self, customer_id: u64) -> EngineResult<Vec<Loan>>;

    /// Fetches a loan by id.
    fn get_loan(&self, loan_id: u64) -> EngineResult<Loan>;

    /// Registers a customer, assigning an id and the approved limit.
    fn create_customer(&self, new: NewCustomer) -> EngineResult<Customer>;

    /// Persists a loan, assigning an id.
    ///
    /// Every loan must reference a registered customer; an unknown
    /// `customer_id` fails with `CustomerNotFound`.
    fn create_loan(&self, new: NewLoan) -> EngineResult<Loan>;
}
