//! Loan model and repayment-state predicates.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A loan on a customer's record.
///
/// Loans are created by the loan-creation flow only when the engine approves
/// an application. Installment bookkeeping (`emi_paid_on_time`) is mutated by
/// external collaborators; the scoring engine only reads these records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    /// Unique identifier for the loan, assigned by the store.
    pub loan_id: u64,
    /// The customer who holds this loan. Must reference a registered customer.
    pub customer_id: u64,
    /// The principal amount.
    pub loan_amount: Decimal,
    /// Loan duration in months (at least 1).
    pub tenure: u32,
    /// Annual interest rate in percent.
    pub interest_rate: Decimal,
    /// Fixed monthly repayment amount, computed at creation.
    pub emi_monthly_repayment: Decimal,
    /// Number of installments paid on schedule so far (0..=tenure).
    pub emi_paid_on_time: u32,
    /// The date the loan started.
    pub start_date: NaiveDate,
    /// The date the loan ends (start date plus tenure months).
    pub end_date: NaiveDate,
}

impl Loan {
    /// Returns true when every installment across the full tenure was paid
    /// on schedule.
    pub fn is_fully_paid_on_time(&self) -> bool {
        self.emi_paid_on_time == self.tenure
    }

    /// Returns true when the loan is still running as of the given date.
    pub fn is_active(&self, as_of: NaiveDate) -> bool {
        self.end_date >= as_of
    }

    /// Returns the number of installments still owed.
    pub fn repayments_left(&self) -> u32 {
        self.tenure.saturating_sub(self.emi_paid_on_time)
    }
}
