//! Result types produced by the scoring engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The reason a credit score was forced to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disqualifier {
    /// Active monthly installments exceed half the customer's monthly salary.
    EmiBurdenExceeded,
    /// The approved credit limit is fully or over-utilized.
    NoCreditHeadroom,
}

/// The weighted sub-scores behind a credit score, before policy mapping.
///
/// Each sub-score is a 0-25 contribution (the loan-count contribution is
/// deliberately unclamped and can exceed 25 for customers with more than
/// ten historical loans).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Contribution from the fraction of loans fully paid on schedule.
    pub timely_payment: Decimal,
    /// Contribution from the total number of historical loans.
    pub loan_count: Decimal,
    /// Contribution from loan activity in the current calendar year.
    pub recency: Decimal,
    /// Contribution from remaining headroom under the approved limit.
    pub headroom: Decimal,
    /// Sum of monthly installments for currently active loans.
    pub active_emi_total: Decimal,
    /// Set when a hard disqualifier overrides the summed score.
    pub disqualifier: Option<Disqualifier>,
}

impl ScoreBreakdown {
    /// Returns the final credit score: the sum of the four sub-scores, or
    /// zero when a hard disqualifier applies.
    pub fn total(&self) -> Decimal {
        if self.disqualifier.is_some() {
            Decimal::ZERO
        } else {
            self.timely_payment + self.loan_count + self.recency + self.headroom
        }
    }
}

/// The outcome of evaluating a customer's credit eligibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Whether a new loan application is approved.
    pub approved: bool,
    /// Annual interest rate in percent for the approved loan (0 if rejected).
    pub interest_rate: Decimal,
    /// Rate after correction. Currently always equal to `interest_rate`;
    /// kept as a distinct field as the seam for future rate adjustment.
    pub corrected_interest_rate: Decimal,
    /// The credit score the decision was derived from.
    pub credit_score: Decimal,
}
