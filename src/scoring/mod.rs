//! Scoring logic for the Credit Eligibility Engine.
//!
//! This module contains the credit-scoring rules: the timely-payment ratio,
//! the loan-count ratio, the current-year recency factor, the credit-headroom
//! ratio, the active-EMI burden check, the composition of those rules into a
//! credit score, the approval/rate policy, and the installment formula used
//! by the loan-creation flow.
//!
//! All rules are pure functions over a customer profile and the loan history
//! fetched for it; nothing here holds hidden state between calls.

mod credit_score;
mod emi_burden;
mod headroom;
mod installment;
mod loan_count;
mod policy;
mod recency;
mod timely_payment;

pub use credit_score::{PERFECT_SCORE, credit_score, evaluate, score_breakdown};
pub use emi_burden::{active_emi_total, emi_within_salary};
pub use headroom::headroom_score;
pub use installment::monthly_installment;
pub use loan_count::{LOAN_COUNT_CAP, loan_count_score};
pub use policy::decision_for_score;
pub use recency::recency_score;
pub use timely_payment::timely_payment_score;

use rust_decimal::Decimal;

/// Scales a raw percentage (0-100) into its weighted 0-25 contribution.
pub(crate) fn weigh(raw_percent: Decimal) -> Decimal {
    raw_percent * Decimal::from(25) / Decimal::from(100)
}
