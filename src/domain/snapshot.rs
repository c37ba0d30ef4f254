use serde::{Deserialize, Serialize};

use crate::domain::{Expense, FutureItem, ShoppingItem, Task};

/// Immutable view of every collection the dashboard reads at one point in time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdSnapshot {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub shopping_items: Vec<ShoppingItem>,
    #[serde(default)]
    pub future_items: Vec<FutureItem>,
}

impl HouseholdSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn with_expenses(mut self, expenses: Vec<Expense>) -> Self {
        self.expenses = expenses;
        self
    }

    pub fn with_shopping_items(mut self, items: Vec<ShoppingItem>) -> Self {
        self.shopping_items = items;
        self
    }

    pub fn with_future_items(mut self, items: Vec<FutureItem>) -> Self {
        self.future_items = items;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
            && self.expenses.is_empty()
            && self.shopping_items.is_empty()
            && self.future_items.is_empty()
    }
}
