mod common;

use common::date;
use household_core::{
    calendar::last_n_month_keys,
    domain::{Expense, Task},
    metrics::{
        days_until_next_bill, monthly_savings, overdue_task_count, percentage_change,
        top_expense_category, CategoryLeader,
    },
};

#[test]
fn savings_when_current_month_spends_more() {
    let today = date(2025, 10, 20);
    let expenses = vec![
        Expense::new(1, "Feira", 100.0, date(2025, 10, 5), "Geral"),
        Expense::new(2, "Padaria", 50.0, date(2025, 9, 10), "Geral"),
    ];
    let metric = monthly_savings(&expenses, today);
    assert_eq!(metric.savings, -50.0);
    assert!(metric.percentage < 0.0);
    assert_eq!(metric.percentage, percentage_change(100.0, 50.0) * -1.0);
}

#[test]
fn leading_category_of_the_month() {
    let today = date(2025, 10, 20);
    let expenses = vec![
        Expense::new(1, "Aluguel", 200.0, date(2025, 10, 1), "Fixo"),
        Expense::new(2, "Mercado", 150.0, date(2025, 10, 2), "Geral"),
        Expense::new(3, "Água", 50.0, date(2025, 10, 3), "Fixo"),
    ];
    assert_eq!(
        top_expense_category(&expenses, today),
        CategoryLeader {
            category: "Fixo".into(),
            total: 250.0,
        }
    );
}

#[test]
fn next_bill_two_days_out() {
    let today = date(2025, 10, 10);
    let expenses = vec![Expense::new(1, "Condomínio", 600.0, date(2025, 10, 12), "Fixo")];
    let bill = days_until_next_bill(&expenses, today);
    assert_eq!(bill.days, 2);
    assert_eq!(bill.description, "Condomínio");
}

#[test]
fn overdue_tasks_on_october_thirtieth() {
    let tasks = vec![
        Task::new(1, "Lavar carro", "Ana", date(2025, 10, 28)),
        Task::new(2, "Consertar porta", "Rui", date(2025, 10, 1)).completed(),
        Task::new(3, "Podar árvore", "Ana", date(2025, 11, 2)),
    ];
    assert_eq!(overdue_task_count(&tasks, date(2025, 10, 30)), 1);
}

#[test]
fn six_month_window_in_january_crosses_year() {
    let keys: Vec<String> = last_n_month_keys(date(2026, 1, 5), 6)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        keys,
        ["2025-08", "2025-09", "2025-10", "2025-11", "2025-12", "2026-01"]
    );
    let mut deduped = keys.clone();
    deduped.dedup();
    assert_eq!(deduped.len(), 6);
}
