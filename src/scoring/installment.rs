//! Monthly installment formula for approved loans.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Calculates the fixed monthly installment for a loan.
///
/// Simple interest spread over the tenure:
/// `(principal * annual_rate_percent / 100 + principal) / tenure_months`.
/// This is deliberately not an amortized compound-interest schedule; the
/// formula matches what the back office charges.
///
/// # Errors
///
/// Returns `InvalidLoanTerms` for a zero-month tenure.
pub fn monthly_installment(
    principal: Decimal,
    annual_rate_percent: Decimal,
    tenure_months: u32,
) -> EngineResult<Decimal> {
    if tenure_months == 0 {
        return Err(EngineError::InvalidLoanTerms {
            field: "tenure".to_string(),
            message: "must be at least 1 month".to_string(),
        });
    }

    let interest = principal * annual_rate_percent / Decimal::from(100);
    Ok((interest + principal) / Decimal::from(tenure_months))
}
