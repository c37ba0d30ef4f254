//! Normalization of raw records delivered by the data-access layer.
//!
//! The data layer hands over loosely typed JSON: dates as `YYYY-MM-DD`
//! strings, amounts that are sometimes numbers and sometimes strings such as
//! `"R$ 2.500"`. Everything is parsed exactly once here so the metrics only
//! ever see typed records. The first invalid record aborts the whole batch
//! with a [`HouseholdError::Validation`] naming it.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    currency::{parse_currency, LocaleConfig},
    domain::{Expense, FutureItem, HouseholdSnapshot, Priority, ShoppingItem, Task},
    errors::{HouseholdError, RecordKind, Result},
};

/// Converts a raw record into its typed counterpart.
pub trait Normalize {
    type Output;

    fn normalize(self, locale: &LocaleConfig) -> Result<Self::Output>;
}

/// Amount as found in the wild: a JSON number or a formatted string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    fn resolve(
        &self,
        locale: &LocaleConfig,
        record: RecordKind,
        id: u64,
        field: &'static str,
    ) -> Result<f64> {
        let value = match self {
            RawAmount::Number(value) => Some(*value),
            RawAmount::Text(text) => parse_currency(text, locale),
        };
        match value {
            Some(value) if value.is_finite() => Ok(value),
            Some(value) => Err(HouseholdError::validation(
                record,
                id,
                field,
                format!("is not a finite number ({value})"),
            )),
            None => Err(HouseholdError::validation(
                record,
                id,
                field,
                format!("is not numeric ({self:?})"),
            )),
        }
    }
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        RawAmount::Number(value)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTask {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub assigned_to: String,
    #[serde(default)]
    pub completed: bool,
    pub due_date: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawExpense {
    pub id: u64,
    #[serde(default)]
    pub description: String,
    pub value: RawAmount,
    pub date: String,
    #[serde(default = "default_expense_category")]
    pub category: String,
}

fn default_expense_category() -> String {
    "Geral".into()
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawShoppingItem {
    pub id: u64,
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: Option<RawAmount>,
}

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFutureItem {
    pub id: u64,
    pub name: String,
    pub priority: Priority,
    #[serde(default)]
    pub estimated_cost: Option<String>,
    #[serde(default)]
    pub estimated_value: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Collections exactly as the data-access layer serves them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSnapshot {
    #[serde(default)]
    pub tasks: Vec<RawTask>,
    #[serde(default)]
    pub expenses: Vec<RawExpense>,
    #[serde(default)]
    pub shopping_items: Vec<RawShoppingItem>,
    #[serde(default)]
    pub future_items: Vec<RawFutureItem>,
}

/// Parses `YYYY-MM-DD`, also accepting a trailing `T...` time component.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    let date_part = match trimmed.split_once('T') {
        Some((date, _)) => date,
        None => trimmed,
    };
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn required_date(raw: &str, record: RecordKind, id: u64, field: &'static str) -> Result<NaiveDate> {
    parse_iso_date(raw).ok_or_else(|| {
        HouseholdError::validation(record, id, field, format!("`{raw}` is not a YYYY-MM-DD date"))
    })
}

impl Normalize for RawTask {
    type Output = Task;

    fn normalize(self, _locale: &LocaleConfig) -> Result<Task> {
        let due_date = required_date(&self.due_date, RecordKind::Task, self.id, "dueDate")?;
        Ok(Task {
            id: self.id,
            title: self.title,
            assigned_to: self.assigned_to,
            completed: self.completed,
            due_date,
        })
    }
}

impl Normalize for RawExpense {
    type Output = Expense;

    fn normalize(self, locale: &LocaleConfig) -> Result<Expense> {
        let date = required_date(&self.date, RecordKind::Expense, self.id, "date")?;
        let value = self
            .value
            .resolve(locale, RecordKind::Expense, self.id, "value")?;
        Ok(Expense::new(
            self.id,
            self.description,
            value,
            date,
            self.category,
        ))
    }
}

impl Normalize for RawShoppingItem {
    type Output = ShoppingItem;

    fn normalize(self, locale: &LocaleConfig) -> Result<ShoppingItem> {
        let price = self
            .price
            .map(|amount| amount.resolve(locale, RecordKind::ShoppingItem, self.id, "price"))
            .transpose()?;
        Ok(ShoppingItem {
            id: self.id,
            name: self.name,
            quantity: self.quantity,
            checked: self.checked,
            category: self.category,
            price,
        })
    }
}

impl Normalize for RawFutureItem {
    type Output = FutureItem;

    fn normalize(self, locale: &LocaleConfig) -> Result<FutureItem> {
        let estimated_value = match (self.estimated_value, self.estimated_cost.as_deref()) {
            (Some(value), _) => RawAmount::Number(value).resolve(
                locale,
                RecordKind::FutureItem,
                self.id,
                "estimatedValue",
            )?,
            (None, Some(cost)) => RawAmount::Text(cost.to_string()).resolve(
                locale,
                RecordKind::FutureItem,
                self.id,
                "estimatedCost",
            )?,
            (None, None) => {
                return Err(HouseholdError::validation(
                    RecordKind::FutureItem,
                    self.id,
                    "estimatedCost",
                    "is missing",
                ))
            }
        };
        let mut item = FutureItem::new(self.id, self.name, self.priority, estimated_value);
        item.status = self.status;
        Ok(item)
    }
}

fn normalize_all<T: Normalize>(records: Vec<T>, locale: &LocaleConfig) -> Result<Vec<T::Output>> {
    records
        .into_iter()
        .map(|record| record.normalize(locale))
        .collect()
}

impl Normalize for RawSnapshot {
    type Output = HouseholdSnapshot;

    fn normalize(self, locale: &LocaleConfig) -> Result<HouseholdSnapshot> {
        let snapshot = HouseholdSnapshot {
            tasks: normalize_all(self.tasks, locale)?,
            expenses: normalize_all(self.expenses, locale)?,
            shopping_items: normalize_all(self.shopping_items, locale)?,
            future_items: normalize_all(self.future_items, locale)?,
        };
        tracing::debug!(
            tasks = snapshot.tasks.len(),
            expenses = snapshot.expenses.len(),
            shopping_items = snapshot.shopping_items.len(),
            future_items = snapshot.future_items.len(),
            "normalized household snapshot"
        );
        Ok(snapshot)
    }
}

/// Deserializes and normalizes a raw JSON snapshot.
pub fn snapshot_from_json(json: &str, locale: &LocaleConfig) -> Result<HouseholdSnapshot> {
    let raw: RawSnapshot = serde_json::from_str(json)?;
    raw.normalize(locale).map_err(|err| {
        tracing::warn!(error = %err, "rejected household snapshot");
        err
    })
}
