//! The dashboard metrics engine: pure functions over record slices.

pub mod aggregation;
pub mod dashboard;
pub mod household;
pub mod stats;

pub use aggregation::{
    generate_trend_series, group_expenses_by_month, group_tasks_by_month, labelled_trend_series,
    month_total, task_completion_trend, TaskMonthStats, TrendPoint,
};
pub use dashboard::{
    current_month_total, daily_average_expense, days_until_next_bill, days_until_next_bill_in,
    expense_change_percent, monthly_expense_projection, monthly_savings, overdue_task_count,
    previous_month_total, top_expense_category, CategoryLeader, NextBill, SavingsMetric, NO_BILL,
    NO_CATEGORY,
};
pub use household::{
    future_items_summary, pending_shopping_count, pending_shopping_estimate, shopping_overview,
    top_shopping_category, FutureItemsSummary, ShoppingOverview,
};
pub use stats::{average, percentage_change, round_to};
