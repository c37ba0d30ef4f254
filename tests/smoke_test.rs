mod common;

use std::sync::Arc;

use common::{approx_eq, date, sample_household, temp_home};
use household_core::{
    calendar::FixedClock,
    config::{ConfigManager, DashboardConfig},
    init,
    metrics::NO_BILL,
    DashboardService,
};

#[test]
fn dashboard_smoke() {
    init();

    let service = DashboardService::with_clock(
        DashboardConfig::default(),
        Arc::new(FixedClock(date(2025, 10, 15))),
    );
    let summary = service.summarize(&sample_household());

    assert!(approx_eq(summary.current_month_total, 2869.9));
    assert!(approx_eq(summary.previous_month_total, 2300.4));
    assert!(approx_eq(summary.top_category.total, 1809.9));
    assert_eq!(summary.top_category.category, "Fixo");
    assert_eq!(summary.next_bill.description, "Internet");
    assert_eq!(summary.next_bill.days, 3);
    assert_eq!(summary.overdue_tasks, 2);
    assert_eq!(summary.tasks_this_month.total, 4);
    assert_eq!(summary.tasks_this_month.completion_rate, 25);
    assert_eq!(summary.expense_trend.len(), 6);
    assert_eq!(summary.shopping.pending, 2);
    assert_eq!(summary.future_items.count, 2);

    let json = serde_json::to_value(&summary).expect("summary serializes");
    assert_eq!(json["current_month"], "2025-10");
}

#[test]
fn service_reads_persisted_config() {
    let manager = ConfigManager::with_base_dir(temp_home());
    let mut config = DashboardConfig::default();
    config.trend_months = 2;
    config.bill_category = "Manutenção".into();
    manager.save(&config).expect("save config");

    let service = DashboardService::from_config_manager(&manager).expect("load config");
    assert_eq!(service.config().trend_months, 2);

    let summary = service.summarize_at(&sample_household(), date(2025, 10, 15));
    assert_eq!(summary.expense_trend.len(), 2);
    assert_eq!(summary.next_bill.description, NO_BILL);
}
