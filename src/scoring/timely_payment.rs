//! Timely-payment ratio sub-score.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::Loan;

/// Calculates the timely-payment contribution to the credit score.
///
/// The raw percentage is the fraction of historical loans whose every
/// installment was paid on schedule (`emi_paid_on_time == tenure`), scaled
/// into a 0-25 contribution.
///
/// # Errors
///
/// Returns `InvalidLoanHistory` when called with an empty loan list. The
/// public evaluation path short-circuits empty histories to a perfect score
/// before any sub-score runs, so an empty list here means the caller skipped
/// that check; the guard keeps the ratio's denominator from reaching zero.
pub fn timely_payment_score(customer_id: u64, loans: &[Loan]) -> EngineResult<Decimal> {
    let total = loans.len();
    if total == 0 {
        return Err(EngineError::InvalidLoanHistory {
            customer_id,
            message: "timely-payment ratio requested with no loans on record".to_string(),
        });
    }

    let timely = loans.iter().filter(|l| l.is_fully_paid_on_time()).count();
    let raw_percent =
        Decimal::from(timely as u64) / Decimal::from(total as u64) * Decimal::from(100);
    Ok(super::weigh(raw_percent))
}
