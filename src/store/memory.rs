//! In-memory implementation of the credit store.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{EngineError, EngineResult};
use crate::models::{Customer, Loan, approved_limit_for};
use rust_decimal::Decimal;

use super::{CreditStore, NewCustomer, NewLoan};

#[derive(Debug, Default)]
struct Inner {
    customers: HashMap<u64, Customer>,
    loans: HashMap<u64, Loan>,
    next_customer_id: u64,
    next_loan_id: u64,
}

/// A thread-safe in-memory customer/loan store.
///
/// Backs the API and tests. Reads and writes go through a single `RwLock`;
/// concurrent evaluations only take the read side.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CreditStore for MemoryStore {
    fn get_customer(&self, customer_id: u64) -> EngineResult<Customer> {
        let inner = self.inner.read().expect("store lock poisoned");
        inner
            .customers
            .get(&customer_id)
            .cloned()
            .ok_or(EngineError::CustomerNotFound { customer_id })
    }

    fn list_loans(&self, customer_id: u64) -> EngineResult<Vec<Loan>> {
        let inner = self.inner.read().expect("store lock poisoned");
        if !inner.customers.contains_key(&customer_id) {
            return Err(EngineError::CustomerNotFound { customer_id });
        }
        Ok(inner
            .loans
            .values()
            .filter(|l| l.customer_id == customer_id)
            .cloned()
            .collect())
    }

    fn get_loan(&self, loan_id: u64) -> EngineResult<Loan> {
        let inner = self.inner.read().expect("store lock poisoned");
        inner
            .loans
            .get(&loan_id)
            .cloned()
            .ok_or(EngineError::LoanNotFound { loan_id })
    }

    fn create_customer(&self, new: NewCustomer) -> EngineResult<Customer> {
        if new.monthly_salary <= 0 {
            return Err(EngineError::InvalidCustomer {
                field: "monthly_salary".to_string(),
                message: "must be positive".to_string(),
            });
        }

        let mut inner = self.inner.write().expect("store lock poisoned");
        inner.next_customer_id += 1;
        let customer = Customer {
            customer_id: inner.next_customer_id,
            first_name: new.first_name,
            last_name: new.last_name,
            age: new.age,
            phone_number: new.phone_number,
            monthly_salary: new.monthly_salary,
            approved_limit: approved_limit_for(new.monthly_salary),
            current_debt: Decimal::ZERO,
        };
        inner.customers.insert(customer.customer_id, customer.clone());
        Ok(customer)
    }

    fn create_loan(&self, new: NewLoan) -> EngineResult<Loan> {
        let mut inner = self.inner.write().expect("store lock poisoned");
        if !inner.customers.contains_key(&new.customer_id) {
            return Err(EngineError::CustomerNotFound {
                customer_id: new.customer_id,
            });
        }

        inner.next_loan_id += 1;
        let loan = Loan {
            loan_id: inner.next_loan_id,
            customer_id: new.customer_id,
            loan_amount: new.loan_amount,
            tenure: new.tenure,
            interest_rate: new.interest_rate,
            emi_monthly_repayment: new.emi_monthly_repayment,
            emi_paid_on_time: new.emi_paid_on_time,
            start_date: new.start_date,
            end_date: new.end_date,
        };
        inner.loans.insert(loan.loan_id, loan.clone());
        Ok(loan)
    }
}
