//! Household chores and to-dos.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::Dated;

/// A chore assigned to a household member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub assigned_to: String,
    pub completed: bool,
    pub due_date: NaiveDate,
}

impl Task {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        assigned_to: impl Into<String>,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            assigned_to: assigned_to.into(),
            completed: false,
            due_date,
        }
    }

    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }

    /// Open and strictly past its due date.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date < today
    }
}

impl Dated for Task {
    fn date(&self) -> NaiveDate {
        self.due_date
    }
}
