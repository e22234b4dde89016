//! Application state for the Credit Eligibility Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::store::CreditStore;

/// Shared application state.
///
/// Contains the record store shared across all request handlers, plus an
/// optional pinned evaluation reference date. When no date is pinned the
/// handlers evaluate as of the system clock date at call time.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn CreditStore>,
    reference_date: Option<NaiveDate>,
}

impl AppState {
    /// Creates application state over the given store, evaluating as of the
    /// system clock date.
    pub fn new(store: impl CreditStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
            reference_date: None,
        }
    }

    /// Creates application state with a pinned evaluation reference date.
    ///
    /// Used by tests that need date-dependent scoring (recency, active EMIs)
    /// to be deterministic.
    pub fn with_reference_date(store: impl CreditStore + 'static, as_of: NaiveDate) -> Self {
        Self {
            store: Arc::new(store),
            reference_date: Some(as_of),
        }
    }

    /// Returns a reference to the record store.
    pub fn store(&self) -> &dyn CreditStore {
        self.store.as_ref()
    }

    /// Returns the evaluation reference date: the pinned date if set,
    /// otherwise today.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Utc::now().date_naive())
    }
}
