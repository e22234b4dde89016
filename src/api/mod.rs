//! HTTP API module for the Credit Eligibility Engine.
//!
//! This module provides the REST endpoints for registering customers,
//! checking loan eligibility, creating loans, and viewing loan records.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{LoanApplicationRequest, RegisterCustomerRequest};
pub use response::ApiError;
pub use state::AppState;
