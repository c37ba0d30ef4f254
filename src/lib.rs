#![doc(test(attr(deny(warnings))))]

//! Household Core derives the dashboard figures of a household manager
//! (monthly spending, savings, trends, upcoming bills and overdue chores)
//! from plain collections of task, expense, shopping and wish-list records.
//!
//! ```
//! use chrono::NaiveDate;
//! use household_core::{domain::Expense, metrics};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 10, 10).unwrap();
//! let due = NaiveDate::from_ymd_opt(2025, 10, 12).unwrap();
//! let expenses = vec![Expense::new(1, "Condomínio", 600.0, due, "Fixo")];
//! let bill = metrics::days_until_next_bill(&expenses, today);
//! assert_eq!(bill.days, 2);
//! ```

pub mod calendar;
pub mod config;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod ingest;
pub mod metrics;
pub mod services;
pub mod utils;

pub use errors::{HouseholdError, Result};
pub use services::{DashboardService, DashboardSummary};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Household Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
