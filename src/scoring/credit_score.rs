//! Credit-score composition and the store-backed evaluation entry point.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{Customer, Disqualifier, Evaluation, Loan, ScoreBreakdown};
use crate::store::CreditStore;

use super::emi_burden::{active_emi_total, emi_within_salary};
use super::headroom::headroom_score;
use super::loan_count::loan_count_score;
use super::policy::decision_for_score;
use super::recency::recency_score;
use super::timely_payment::timely_payment_score;

/// The score assigned to a customer with no adverse history on record.
pub const PERFECT_SCORE: Decimal = Decimal::ONE_HUNDRED;

/// Computes the weighted sub-scores and hard-disqualifier state for a
/// customer with at least one historical loan.
///
/// The loan list is threaded in explicitly; callers fetch it once and every
/// sub-score works from the same snapshot.
pub fn score_breakdown(
    customer: &Customer,
    loans: &[Loan],
    as_of: NaiveDate,
) -> EngineResult<ScoreBreakdown> {
    let timely_payment = timely_payment_score(customer.customer_id, loans)?;
    let loan_count = loan_count_score(loans);
    let recency = recency_score(loans, as_of);
    let headroom = headroom_score(customer, loans);
    let active_emi = active_emi_total(loans, as_of);

    let disqualifier = if !emi_within_salary(active_emi, customer.monthly_salary) {
        Some(Disqualifier::EmiBurdenExceeded)
    } else if headroom == Decimal::ZERO {
        Some(Disqualifier::NoCreditHeadroom)
    } else {
        None
    };

    Ok(ScoreBreakdown {
        timely_payment,
        loan_count,
        recency,
        headroom,
        active_emi_total: active_emi,
        disqualifier,
    })
}

/// Computes the credit score for a customer given their loan history.
///
/// A customer with zero historical loans short-circuits to [`PERFECT_SCORE`]
/// without computing sub-scores; otherwise the score is the sum of the four
/// weighted sub-scores, zeroed by any hard disqualifier.
pub fn credit_score(
    customer: &Customer,
    loans: &[Loan],
    as_of: NaiveDate,
) -> EngineResult<Decimal> {
    if loans.is_empty() {
        return Ok(PERFECT_SCORE);
    }
    Ok(score_breakdown(customer, loans, as_of)?.total())
}

/// Evaluates a customer's credit eligibility.
///
/// Fetches the customer profile and loan history from the store, computes
/// the credit score as of `as_of`, and maps it through the approval policy.
/// Read-only: issues no writes and holds no state between calls.
///
/// # Errors
///
/// Returns `CustomerNotFound` for an unknown customer id.
pub fn evaluate(
    store: &dyn CreditStore,
    customer_id: u64,
    as_of: NaiveDate,
) -> EngineResult<Evaluation> {
    let customer = store.get_customer(customer_id)?;
    let loans = store.list_loans(customer_id)?;
    let score = credit_score(&customer, &loans, as_of)?;
    Ok(decision_for_score(score))
}
