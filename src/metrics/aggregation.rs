//! Month bucketing of expenses and tasks plus fixed-window trend series.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    calendar::{last_n_month_keys, MonthKey},
    domain::{Dated, Expense, Task},
    metrics::stats::completion_percent,
};

/// Task counters for one month, bucketed by due date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskMonthStats {
    pub total: usize,
    pub completed: usize,
    pub completion_rate: u32,
}

impl TaskMonthStats {
    fn record(&mut self, task: &Task) {
        self.total += 1;
        if task.completed {
            self.completed += 1;
        }
        self.completion_rate = completion_percent(self.completed, self.total);
    }
}

/// One labelled point of a trend series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint<V> {
    pub month: MonthKey,
    pub value: V,
}

/// Records whose date falls inside `month`.
pub fn in_month<'a, T: Dated>(
    records: &'a [T],
    month: MonthKey,
) -> impl Iterator<Item = &'a T> + 'a {
    records.iter().filter(move |record| month.contains(record.date()))
}

/// Sum of expense values within `month`.
pub fn month_total(expenses: &[Expense], month: MonthKey) -> f64 {
    in_month(expenses, month).fold(0.0, |total, expense| total + expense.value)
}

pub fn group_expenses_by_month(expenses: &[Expense]) -> BTreeMap<MonthKey, f64> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        *totals.entry(MonthKey::from_date(expense.date)).or_insert(0.0) += expense.value;
    }
    totals
}

pub fn group_tasks_by_month(tasks: &[Task]) -> BTreeMap<MonthKey, TaskMonthStats> {
    let mut stats: BTreeMap<MonthKey, TaskMonthStats> = BTreeMap::new();
    for task in tasks {
        stats
            .entry(MonthKey::from_date(task.due_date))
            .or_default()
            .record(task);
    }
    stats
}

/// One value per month of the `n`-month window ending at `today`, oldest first.
/// Months absent from `monthly` contribute `V::default()`.
pub fn generate_trend_series<V: Copy + Default>(
    monthly: &BTreeMap<MonthKey, V>,
    today: NaiveDate,
    n: usize,
) -> Vec<V> {
    last_n_month_keys(today, n)
        .into_iter()
        .map(|key| monthly.get(&key).copied().unwrap_or_default())
        .collect()
}

/// Same window as [`generate_trend_series`] with each value tagged by its month.
pub fn labelled_trend_series<V: Copy + Default>(
    monthly: &BTreeMap<MonthKey, V>,
    today: NaiveDate,
    n: usize,
) -> Vec<TrendPoint<V>> {
    last_n_month_keys(today, n)
        .into_iter()
        .map(|month| TrendPoint {
            month,
            value: monthly.get(&month).copied().unwrap_or_default(),
        })
        .collect()
}

/// Completion rate per month over the trailing window.
pub fn task_completion_trend(tasks: &[Task], today: NaiveDate, n: usize) -> Vec<u32> {
    let rates: BTreeMap<MonthKey, u32> = group_tasks_by_month(tasks)
        .into_iter()
        .map(|(key, stats)| (key, stats.completion_rate))
        .collect();
    generate_trend_series(&rates, today, n)
}
