use std::fmt;

use thiserror::Error;

/// Record families accepted at the ingestion boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Task,
    Expense,
    ShoppingItem,
    FutureItem,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecordKind::Task => "task",
            RecordKind::Expense => "expense",
            RecordKind::ShoppingItem => "shopping item",
            RecordKind::FutureItem => "future item",
        };
        f.write_str(label)
    }
}

/// Unified error type for ingestion, configuration and file access.
#[derive(Debug, Error)]
pub enum HouseholdError {
    #[error("Invalid {record} #{id}: field `{field}` {reason}")]
    Validation {
        record: RecordKind,
        id: u64,
        field: &'static str,
        reason: String,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl HouseholdError {
    pub fn validation(
        record: RecordKind,
        id: u64,
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        HouseholdError::Validation {
            record,
            id,
            field,
            reason: reason.into(),
        }
    }

    /// Id of the offending record for validation failures.
    pub fn record_id(&self) -> Option<u64> {
        match self {
            HouseholdError::Validation { id, .. } => Some(*id),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, HouseholdError>;
