#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use chrono::NaiveDate;
use household_core::domain::{
    Expense, FutureItem, HouseholdSnapshot, Priority, ShoppingItem, Task,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated directory that outlives the calling test.
pub fn temp_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Compares currency sums that went through floating point addition.
pub fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-6
}

/// Writes a normalized snapshot as pretty JSON, the shape the loader reads back.
pub fn write_snapshot_json(snapshot: &HouseholdSnapshot, path: &Path) {
    let json = serde_json::to_string_pretty(snapshot).expect("serialize snapshot");
    fs::write(path, json).expect("write snapshot fixture");
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// A household with two months of spending around October 2025.
pub fn sample_household() -> HouseholdSnapshot {
    HouseholdSnapshot::new()
        .with_expenses(vec![
            Expense::new(1, "Aluguel", 1500.0, date(2025, 9, 1), "Fixo"),
            Expense::new(2, "Mercado", 620.4, date(2025, 9, 12), "Geral"),
            Expense::new(3, "Chuveiro", 180.0, date(2025, 9, 20), "Manutenção"),
            Expense::new(4, "Aluguel", 1500.0, date(2025, 10, 1), "Fixo"),
            Expense::new(5, "Mercado", 410.0, date(2025, 10, 4), "Geral"),
            Expense::new(6, "Internet", 99.9, date(2025, 10, 18), "Fixo"),
            Expense::new(7, "Luz", 210.0, date(2025, 10, 24), "Fixo"),
            Expense::new(8, "Micro-ondas", 650.0, date(2025, 10, 7), "Novo item"),
        ])
        .with_tasks(vec![
            Task::new(1, "Tirar o lixo", "Ana", date(2025, 10, 3)).completed(),
            Task::new(2, "Limpar banheiro", "Rui", date(2025, 10, 9)),
            Task::new(3, "Regar plantas", "Ana", date(2025, 10, 11)),
            Task::new(4, "Trocar lâmpada", "Rui", date(2025, 10, 29)),
            Task::new(5, "Pagar IPTU", "Ana", date(2025, 9, 15)).completed(),
        ])
        .with_shopping_items(vec![
            ShoppingItem::new(1, "Arroz", 2, "Mercado").with_price(24.9),
            ShoppingItem::new(2, "Leite", 6, "Mercado").with_price(5.5),
            ShoppingItem::new(3, "Desinfetante", 1, "Limpeza").checked(),
        ])
        .with_future_items(vec![
            FutureItem::new(1, "Geladeira nova", Priority::High, 4200.0),
            FutureItem::new(2, "Cortinas", Priority::Low, 350.0),
        ])
}
