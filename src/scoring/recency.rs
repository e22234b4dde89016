//! Current-year recency sub-score.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::Loan;

/// Calculates the recency contribution to the credit score.
///
/// Counts loans whose start date falls in the calendar year of `as_of`:
/// no loans this year is a 100% raw percentage, exactly one is 50%, and two
/// or more is 0%. The reference date is threaded in explicitly so the rule
/// never bakes in a literal year.
pub fn recency_score(loans: &[Loan], as_of: NaiveDate) -> Decimal {
    let year = as_of.year();
    let current_year_loans = loans
        .iter()
        .filter(|l| l.start_date.year() == year)
        .count();

    let raw_percent = match current_year_loans {
        0 => Decimal::from(100),
        1 => Decimal::from(50),
        _ => Decimal::ZERO,
    };
    super::weigh(raw_percent)
}
