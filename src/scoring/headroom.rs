//! Credit-headroom sub-score.

use rust_decimal::Decimal;

use crate::models::{Customer, Loan};

/// Calculates the credit-headroom contribution to the credit score.
///
/// Sums all historical loan principals and subtracts the total from the
/// customer's approved limit. A positive remainder contributes its share of
/// the approved limit; a fully or over-utilized limit contributes zero (and
/// is treated as a hard disqualifier by the score composition).
///
/// The remainder is truncated to integer currency units before the
/// percentage is taken, matching the reference arithmetic.
pub fn headroom_score(customer: &Customer, loans: &[Loan]) -> Decimal {
    let total_principal: Decimal = loans.iter().map(|l| l.loan_amount).sum();
    let approved_limit = Decimal::from(customer.approved_limit);

    let headroom = (approved_limit - total_principal).trunc();
    if headroom > Decimal::ZERO {
        let raw_percent = headroom / approved_limit * Decimal::from(100);
        super::weigh(raw_percent)
    } else {
        Decimal::ZERO
    }
}
