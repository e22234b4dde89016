//! Customer model and the approved-limit registration rule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Multiplier applied to monthly salary when fixing a customer's approved
/// credit limit at registration.
pub const APPROVED_LIMIT_SALARY_MULTIPLE: i64 = 36;

/// Returns the approved credit limit for a monthly salary.
///
/// The limit is fixed once at registration as 36 times the monthly salary,
/// in integer currency units.
///
/// # Examples
///
/// ```
/// use credit_engine::models::approved_limit_for;
///
/// assert_eq!(approved_limit_for(38000), 1368000);
/// ```
pub fn approved_limit_for(monthly_salary: i64) -> i64 {
    APPROVED_LIMIT_SALARY_MULTIPLE * monthly_salary
}

/// A registered customer subject to credit evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier for the customer, assigned by the store.
    pub customer_id: u64,
    /// The customer's first name.
    pub first_name: String,
    /// The customer's last name.
    pub last_name: String,
    /// The customer's age in years.
    pub age: u32,
    /// The customer's phone number.
    pub phone_number: u64,
    /// Monthly salary in integer currency units.
    pub monthly_salary: i64,
    /// Maximum aggregate lending exposure, fixed at registration.
    pub approved_limit: i64,
    /// Current outstanding debt (bookkeeping only; not read by scoring).
    #[serde(default)]
    pub current_debt: Decimal,
}

impl Customer {
    /// Returns the customer's full name.
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
