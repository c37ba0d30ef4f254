use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use household_core::{
    calendar::{current_month_key, last_n_month_keys, MonthKey},
    domain::{Expense, Task},
    metrics::{
        average, daily_average_expense, generate_trend_series, group_tasks_by_month,
        monthly_expense_projection, overdue_task_count, percentage_change,
    },
};
use proptest::prelude::*;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..1_460).prop_map(|offset| base_date() + Duration::days(offset))
}

fn amount_strategy() -> impl Strategy<Value = f64> {
    (0i64..5_000_000).prop_map(|cents| cents as f64 / 100.0)
}

fn task_strategy() -> impl Strategy<Value = Task> {
    (0u64..10_000, any::<bool>(), date_strategy()).prop_map(|(id, completed, due)| {
        let task = Task::new(id, "tarefa", "alguém", due);
        if completed {
            task.completed()
        } else {
            task
        }
    })
}

fn expense_strategy() -> impl Strategy<Value = Expense> {
    (
        0u64..10_000,
        amount_strategy(),
        date_strategy(),
        prop::sample::select(vec!["Fixo", "Geral", "Manutenção", "Novo item", "Lazer"]),
    )
        .prop_map(|(id, value, date, category)| Expense::new(id, "gasto", value, date, category))
}

proptest! {
    #[test]
    fn equal_periods_have_no_change(previous in 0.01f64..1_000_000.0) {
        prop_assert_eq!(percentage_change(previous, previous), 0.0);
    }

    #[test]
    fn zero_baseline_is_hundred_or_zero(current in 0.0f64..1_000_000.0) {
        let expected = if current > 0.0 { 100.0 } else { 0.0 };
        prop_assert_eq!(percentage_change(current, 0.0), expected);
    }

    #[test]
    fn average_ignores_order(values in prop::collection::vec(amount_strategy(), 0..40)) {
        let forward = average(&values);
        let mut reversed = values.clone();
        reversed.reverse();
        let backward = average(&reversed);
        prop_assert!((forward - backward).abs() <= 1e-6 * forward.abs().max(1.0));
        prop_assert!(forward.is_finite());
    }

    #[test]
    fn average_of_one_is_itself(value in amount_strategy()) {
        prop_assert_eq!(average(&[value]), value);
    }

    #[test]
    fn completion_rate_stays_in_bounds(tasks in prop::collection::vec(task_strategy(), 0..60)) {
        for stats in group_tasks_by_month(&tasks).values() {
            prop_assert!(stats.completion_rate <= 100);
            prop_assert!(stats.completed <= stats.total);
        }
    }

    #[test]
    fn trend_series_has_exact_length(
        today in date_strategy(),
        n in 0usize..48,
        sparse in prop::collection::vec((date_strategy(), amount_strategy()), 0..10),
    ) {
        let monthly: BTreeMap<MonthKey, f64> = sparse
            .into_iter()
            .map(|(date, value)| (MonthKey::from_date(date), value))
            .collect();
        let series = generate_trend_series(&monthly, today, n);
        prop_assert_eq!(series.len(), n);
        let keys = last_n_month_keys(today, n);
        if let Some(last) = keys.last() {
            prop_assert_eq!(*last, current_month_key(today));
        }
        prop_assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn overdue_count_never_decreases(
        tasks in prop::collection::vec(task_strategy(), 0..60),
        start in date_strategy(),
        step in 0i64..400,
    ) {
        let later = start + Duration::days(step);
        prop_assert!(overdue_task_count(&tasks, start) <= overdue_task_count(&tasks, later));
    }

    #[test]
    fn projection_is_daily_average_times_month_length(
        expenses in prop::collection::vec(expense_strategy(), 0..50),
        today in date_strategy(),
    ) {
        let days = f64::from(current_month_key(today).days());
        prop_assert_eq!(
            daily_average_expense(&expenses, today) * days,
            monthly_expense_projection(&expenses, today)
        );
    }
}
