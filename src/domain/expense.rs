//! Household spending records.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::Dated;

/// Spending category. The known labels are fixed; anything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExpenseCategory {
    Fixed,
    Maintenance,
    NewItem,
    General,
    Other(String),
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &str {
        match self {
            ExpenseCategory::Fixed => "Fixo",
            ExpenseCategory::Maintenance => "Manutenção",
            ExpenseCategory::NewItem => "Novo item",
            ExpenseCategory::General => "Geral",
            ExpenseCategory::Other(label) => label,
        }
    }
}

impl From<&str> for ExpenseCategory {
    fn from(label: &str) -> Self {
        match label {
            "Fixo" => ExpenseCategory::Fixed,
            "Manutenção" => ExpenseCategory::Maintenance,
            "Novo item" => ExpenseCategory::NewItem,
            "Geral" => ExpenseCategory::General,
            other => ExpenseCategory::Other(other.to_string()),
        }
    }
}

impl From<String> for ExpenseCategory {
    fn from(label: String) -> Self {
        ExpenseCategory::from(label.as_str())
    }
}

impl From<ExpenseCategory> for String {
    fn from(category: ExpenseCategory) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single payment made by the household.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: u64,
    pub description: String,
    pub value: f64,
    pub date: NaiveDate,
    pub category: ExpenseCategory,
}

impl Expense {
    pub fn new(
        id: u64,
        description: impl Into<String>,
        value: f64,
        date: NaiveDate,
        category: impl Into<ExpenseCategory>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            value,
            date,
            category: category.into(),
        }
    }
}

impl Dated for Expense {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_round_trip_through_labels() {
        for label in ["Fixo", "Manutenção", "Novo item", "Geral"] {
            let category = ExpenseCategory::from(label);
            assert!(!matches!(category, ExpenseCategory::Other(_)));
            assert_eq!(category.as_str(), label);
        }
    }

    #[test]
    fn free_text_category_is_preserved() {
        let category = ExpenseCategory::from("Lazer");
        assert_eq!(category, ExpenseCategory::Other("Lazer".into()));
        assert_eq!(serde_json::to_string(&category).unwrap(), "\"Lazer\"");
    }
}
