use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    currency::{CurrencyCode, LocaleConfig},
    domain::ExpenseCategory,
    errors::{HouseholdError, Result},
    utils::{app_data_dir, config_file_in, persistence::write_atomic},
};

const MAX_TREND_MONTHS: usize = 120;

/// Tunables for the dashboard summary and its presentation helpers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardConfig {
    #[serde(default)]
    pub locale: LocaleConfig,
    #[serde(default)]
    pub currency: CurrencyCode,
    #[serde(default = "DashboardConfig::default_trend_months")]
    pub trend_months: usize,
    #[serde(default = "DashboardConfig::default_bill_category")]
    pub bill_category: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            locale: LocaleConfig::default(),
            currency: CurrencyCode::default(),
            trend_months: Self::default_trend_months(),
            bill_category: Self::default_bill_category(),
        }
    }
}

impl DashboardConfig {
    pub fn default_trend_months() -> usize {
        6
    }

    pub fn default_bill_category() -> String {
        "Fixo".into()
    }

    pub fn bill_category(&self) -> ExpenseCategory {
        ExpenseCategory::from(self.bill_category.as_str())
    }

    pub fn validate(&self) -> Result<()> {
        if self.trend_months == 0 || self.trend_months > MAX_TREND_MONTHS {
            return Err(HouseholdError::Config(format!(
                "trend_months must be between 1 and {}, got {}",
                MAX_TREND_MONTHS, self.trend_months
            )));
        }
        if self.locale.decimal_separator == self.locale.grouping_separator {
            return Err(HouseholdError::Config(format!(
                "decimal and grouping separators must differ (both `{}`)",
                self.locale.decimal_separator
            )));
        }
        if self.bill_category.trim().is_empty() {
            return Err(HouseholdError::Config("bill_category must not be empty".into()));
        }
        Ok(())
    }
}

/// Loads and persists [`DashboardConfig`] as JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Uses `$HOUSEHOLD_CORE_HOME` or `~/.household_core`.
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            path: config_file_in(&base),
        }
    }

    /// Returns the stored configuration, or the defaults when none was saved yet.
    pub fn load(&self) -> Result<DashboardConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(DashboardConfig::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: DashboardConfig = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &DashboardConfig) -> Result<()> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        tracing::info!(path = %self.path.display(), "saved dashboard config");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
