//! Core data models for the Credit Eligibility Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod customer;
mod decision;
mod loan;

pub use customer::{APPROVED_LIMIT_SALARY_MULTIPLE, Customer, approved_limit_for};
pub use decision::{Disqualifier, Evaluation, ScoreBreakdown};
pub use loan::Loan;
