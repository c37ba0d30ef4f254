//! Headline expense and task figures shown on the dashboard.
//!
//! Every function takes `today` explicitly; "current month" and "previous
//! month" are always relative to it.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    calendar::{current_month_key, previous_month_key},
    domain::{Expense, ExpenseCategory, Task},
    metrics::{
        aggregation::{in_month, month_total},
        stats::{percentage_change, round_to},
    },
};

pub const NO_CATEGORY: &str = "Nenhuma";
pub const NO_BILL: &str = "Nenhuma conta";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsMetric {
    /// Previous month total minus current month total.
    pub savings: f64,
    /// `savings` relative to the previous month total, one decimal; 0 without a baseline.
    pub percentage: f64,
    pub is_positive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryLeader {
    pub category: String,
    pub total: f64,
}

impl CategoryLeader {
    pub fn none() -> Self {
        Self {
            category: NO_CATEGORY.into(),
            total: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextBill {
    pub days: i64,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<NaiveDate>,
}

impl NextBill {
    pub fn none() -> Self {
        Self {
            days: 0,
            description: NO_BILL.into(),
            due: None,
        }
    }
}

pub fn current_month_total(expenses: &[Expense], today: NaiveDate) -> f64 {
    month_total(expenses, current_month_key(today))
}

pub fn previous_month_total(expenses: &[Expense], today: NaiveDate) -> f64 {
    month_total(expenses, previous_month_key(today))
}

/// Month-over-month change in spending, in percent.
pub fn expense_change_percent(expenses: &[Expense], today: NaiveDate) -> f64 {
    percentage_change(
        current_month_total(expenses, today),
        previous_month_total(expenses, today),
    )
}

pub fn monthly_savings(expenses: &[Expense], today: NaiveDate) -> SavingsMetric {
    let current = current_month_total(expenses, today);
    let previous = previous_month_total(expenses, today);
    let savings = previous - current;
    let percentage = if previous.abs() < f64::EPSILON {
        0.0
    } else {
        round_to(savings / previous * 100.0, 1)
    };
    SavingsMetric {
        savings,
        percentage,
        is_positive: savings >= 0.0,
    }
}

/// Category with the largest spend this month. Ties keep the category seen first.
pub fn top_expense_category(expenses: &[Expense], today: NaiveDate) -> CategoryLeader {
    let mut order: Vec<(&ExpenseCategory, f64)> = Vec::new();
    let mut positions: HashMap<&ExpenseCategory, usize> = HashMap::new();
    for expense in in_month(expenses, current_month_key(today)) {
        match positions.get(&expense.category) {
            Some(&idx) => order[idx].1 += expense.value,
            None => {
                positions.insert(&expense.category, order.len());
                order.push((&expense.category, expense.value));
            }
        }
    }
    order
        .into_iter()
        .fold(None::<(&ExpenseCategory, f64)>, |best, (category, total)| match best {
            Some((_, best_total)) if best_total >= total => best,
            _ => Some((category, total)),
        })
        .map(|(category, total)| CategoryLeader {
            category: category.to_string(),
            total,
        })
        .unwrap_or_else(CategoryLeader::none)
}

/// Nearest fixed bill of the current month due today or later.
pub fn days_until_next_bill(expenses: &[Expense], today: NaiveDate) -> NextBill {
    days_until_next_bill_in(expenses, today, &ExpenseCategory::Fixed)
}

/// Like [`days_until_next_bill`] for an arbitrary bill category.
pub fn days_until_next_bill_in(
    expenses: &[Expense],
    today: NaiveDate,
    bill_category: &ExpenseCategory,
) -> NextBill {
    in_month(expenses, current_month_key(today))
        .filter(|expense| &expense.category == bill_category && expense.date >= today)
        .fold(None::<&Expense>, |nearest, expense| match nearest {
            Some(best) if best.date <= expense.date => Some(best),
            _ => Some(expense),
        })
        .map(|bill| NextBill {
            days: (bill.date - today).num_days(),
            description: bill.description.clone(),
            due: Some(bill.date),
        })
        .unwrap_or_else(NextBill::none)
}

pub fn overdue_task_count(tasks: &[Task], today: NaiveDate) -> usize {
    tasks.iter().filter(|task| task.is_overdue(today)).count()
}

/// Current-month spend divided by the days elapsed so far (today included).
pub fn daily_average_expense(expenses: &[Expense], today: NaiveDate) -> f64 {
    current_month_total(expenses, today) / f64::from(today.day())
}

/// Daily average extrapolated over the full length of the current month.
pub fn monthly_expense_projection(expenses: &[Expense], today: NaiveDate) -> f64 {
    daily_average_expense(expenses, today) * f64::from(current_month_key(today).days())
}
