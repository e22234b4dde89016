//! Credit Eligibility Engine for a loan-approval back office.
//!
//! This crate registers customers, computes a credit score from historical
//! loan data, decides approval and interest rate for new loan applications,
//! and serves loan/customer records over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod error;
pub mod models;
pub mod scoring;
pub mod store;
