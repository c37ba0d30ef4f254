use std::{collections::BTreeMap, sync::Arc};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    calendar::{current_month_key, Clock, MonthKey, SystemClock},
    config::{ConfigManager, DashboardConfig},
    currency::format_currency,
    domain::HouseholdSnapshot,
    errors::Result,
    ingest,
    metrics::{
        self, CategoryLeader, FutureItemsSummary, NextBill, SavingsMetric, ShoppingOverview,
        TaskMonthStats, TrendPoint,
    },
};

/// Everything the dashboard screen renders, computed from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub today: NaiveDate,
    pub current_month: MonthKey,
    pub current_month_total: f64,
    pub previous_month_total: f64,
    pub expense_change_percent: f64,
    pub savings: SavingsMetric,
    pub top_category: CategoryLeader,
    pub next_bill: NextBill,
    pub overdue_tasks: usize,
    pub tasks_this_month: TaskMonthStats,
    pub daily_average: f64,
    pub projection: f64,
    pub expense_trend: Vec<TrendPoint<f64>>,
    pub task_completion_trend: Vec<TrendPoint<u32>>,
    pub shopping: ShoppingOverview,
    pub future_items: FutureItemsSummary,
}

/// Computes [`DashboardSummary`] values against an injected clock.
#[derive(Clone)]
pub struct DashboardService {
    config: DashboardConfig,
    clock: Arc<dyn Clock>,
}

impl DashboardService {
    pub fn new(config: DashboardConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: DashboardConfig, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    /// Builds a service from the persisted configuration.
    pub fn from_config_manager(manager: &ConfigManager) -> Result<Self> {
        Ok(Self::new(manager.load()?))
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn summarize(&self, snapshot: &HouseholdSnapshot) -> DashboardSummary {
        self.summarize_at(snapshot, self.today())
    }

    /// Normalizes a raw JSON snapshot and summarizes it.
    pub fn summarize_json(&self, json: &str) -> Result<DashboardSummary> {
        let snapshot = ingest::snapshot_from_json(json, &self.config.locale)?;
        Ok(self.summarize(&snapshot))
    }

    pub fn summarize_at(&self, snapshot: &HouseholdSnapshot, today: NaiveDate) -> DashboardSummary {
        let span = tracing::debug_span!("dashboard_summary", %today);
        let _guard = span.enter();

        let expenses = &snapshot.expenses;
        let tasks = &snapshot.tasks;
        let months = self.config.trend_months;
        let current_month = current_month_key(today);

        let monthly_expenses = metrics::group_expenses_by_month(expenses);
        let monthly_tasks = metrics::group_tasks_by_month(tasks);
        let completion_rates: BTreeMap<MonthKey, u32> = monthly_tasks
            .iter()
            .map(|(month, stats)| (*month, stats.completion_rate))
            .collect();

        let summary = DashboardSummary {
            today,
            current_month,
            current_month_total: metrics::current_month_total(expenses, today),
            previous_month_total: metrics::previous_month_total(expenses, today),
            expense_change_percent: metrics::expense_change_percent(expenses, today),
            savings: metrics::monthly_savings(expenses, today),
            top_category: metrics::top_expense_category(expenses, today),
            next_bill: metrics::days_until_next_bill_in(
                expenses,
                today,
                &self.config.bill_category(),
            ),
            overdue_tasks: metrics::overdue_task_count(tasks, today),
            tasks_this_month: monthly_tasks
                .get(&current_month)
                .copied()
                .unwrap_or_default(),
            daily_average: metrics::daily_average_expense(expenses, today),
            projection: metrics::monthly_expense_projection(expenses, today),
            expense_trend: metrics::labelled_trend_series(&monthly_expenses, today, months),
            task_completion_trend: metrics::labelled_trend_series(
                &completion_rates,
                today,
                months,
            ),
            shopping: metrics::shopping_overview(&snapshot.shopping_items),
            future_items: metrics::future_items_summary(&snapshot.future_items),
        };

        tracing::debug!(
            month = %summary.current_month,
            total = summary.current_month_total,
            overdue = summary.overdue_tasks,
            "dashboard summary computed"
        );
        summary
    }

    /// Renders an amount with the configured currency and locale.
    pub fn format_amount(&self, amount: f64) -> String {
        format_currency(amount, &self.config.currency, &self.config.locale)
    }
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}
