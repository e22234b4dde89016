//! Active-EMI burden check.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::Loan;

/// Sums the monthly installments of loans still active as of the given date.
pub fn active_emi_total(loans: &[Loan], as_of: NaiveDate) -> Decimal {
    loans
        .iter()
        .filter(|l| l.is_active(as_of))
        .map(|l| l.emi_monthly_repayment)
        .sum()
}

/// Returns true when the active-EMI total is within 50% of the monthly salary.
///
/// Exceeding half the salary is a hard disqualifier for any new loan.
pub fn emi_within_salary(active_emi: Decimal, monthly_salary: i64) -> bool {
    let half_salary = Decimal::from(monthly_salary) * Decimal::from(50) / Decimal::from(100);
    active_emi <= half_salary
}
