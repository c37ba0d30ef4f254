//! Typed household records consumed by the metrics engine.

pub mod common;
pub mod expense;
pub mod future_item;
pub mod shopping;
pub mod snapshot;
pub mod task;

pub use common::Dated;
pub use expense::{Expense, ExpenseCategory};
pub use future_item::{FutureItem, Priority};
pub use shopping::ShoppingItem;
pub use snapshot::HouseholdSnapshot;
pub use task::Task;
