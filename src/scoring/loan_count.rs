//! Loan-count ratio sub-score.

use rust_decimal::Decimal;

use crate::models::Loan;

/// The assumed cap on historical loan count used as the ratio's denominator.
pub const LOAN_COUNT_CAP: u32 = 10;

/// Calculates the loan-count contribution to the credit score.
///
/// The raw percentage is the historical loan count over [`LOAN_COUNT_CAP`].
/// The ratio is not clamped at 100%: a customer with more than ten loans
/// contributes more than 25, matching the reference arithmetic.
pub fn loan_count_score(loans: &[Loan]) -> Decimal {
    let raw_percent =
        Decimal::from(loans.len() as u64) / Decimal::from(LOAN_COUNT_CAP) * Decimal::from(100);
    super::weigh(raw_percent)
}
