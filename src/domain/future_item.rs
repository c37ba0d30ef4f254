//! Planned purchases the household is saving towards.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "alta")]
    High,
    #[serde(rename = "média", alias = "media")]
    Medium,
    #[serde(rename = "baixa")]
    Low,
}

/// A wished-for purchase with its estimated value already normalized to a number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FutureItem {
    pub id: u64,
    pub name: String,
    pub priority: Priority,
    pub estimated_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl FutureItem {
    pub fn new(id: u64, name: impl Into<String>, priority: Priority, estimated_value: f64) -> Self {
        Self {
            id,
            name: name.into(),
            priority,
            estimated_value,
            status: None,
        }
    }
}
