//! Approval and interest-rate policy.

use rust_decimal::Decimal;

use crate::models::Evaluation;

/// Maps a credit score to an approval decision and interest rate.
///
/// | Score | Approved | Rate |
/// |---|---|---|
/// | `score >= 50` | yes | 8% |
/// | `30 <= score < 50` | yes | 12% |
/// | `10 < score < 30` | yes | 16% |
/// | `score <= 10` | no | 0% |
///
/// The 50 and 30 boundaries are inclusive on the better tier. The corrected
/// interest rate is currently always the computed rate; it is returned as a
/// separate field so future adjustment logic has somewhere to land.
pub fn decision_for_score(score: Decimal) -> Evaluation {
    let (approved, rate) = if score >= Decimal::from(50) {
        (true, 8)
    } else if score >= Decimal::from(30) {
        (true, 12)
    } else if score > Decimal::from(10) {
        (true, 16)
    } else {
        (false, 0)
    };

    let interest_rate = Decimal::from(rate);
    Evaluation {
        approved,
        interest_rate,
        corrected_interest_rate: interest_rate,
        credit_score: score,
    }
}
