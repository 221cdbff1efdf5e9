//! Engine tunables.
//!
//! Defaults reproduce the dashboard's historical behavior: a 30-day window,
//! 3-day lead time and a safety stock of 5 units when the records leave them
//! unset, and an 8-row reorder preview.

use core::fmt::Display;
use core::str::FromStr;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use stockwise_core::{DomainError, DomainResult};

pub const ENV_WINDOW_DAYS: &str = "STOCKWISE_WINDOW_DAYS";
pub const ENV_DEFAULT_LEAD_TIME_DAYS: &str = "STOCKWISE_DEFAULT_LEAD_TIME_DAYS";
pub const ENV_DEFAULT_MIN_STOCK: &str = "STOCKWISE_DEFAULT_MIN_STOCK";
pub const ENV_REORDER_PREVIEW_LEN: &str = "STOCKWISE_REORDER_PREVIEW_LEN";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReplenishmentPolicy {
    /// Trailing window for outbound movements. Also the demand divisor.
    pub window_days: u32,
    /// Lead time used when a product has no supplier or the supplier has none.
    pub default_lead_time_days: u32,
    /// Safety stock used when a product leaves `min_stock` unset.
    pub default_min_stock: i64,
    /// How many reorder entries the dashboard shows.
    pub reorder_preview_len: usize,
}

impl Default for ReplenishmentPolicy {
    fn default() -> Self {
        Self {
            window_days: 30,
            default_lead_time_days: 3,
            default_min_stock: 5,
            reorder_preview_len: 8,
        }
    }
}

impl ReplenishmentPolicy {
    /// Read overrides from the process environment.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup`.
    ///
    /// Unset keys keep their default. Values that fail to parse keep the
    /// default and log a warning. The resulting policy is validated.
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let policy = Self {
            window_days: read(&lookup, ENV_WINDOW_DAYS, defaults.window_days),
            default_lead_time_days: read(
                &lookup,
                ENV_DEFAULT_LEAD_TIME_DAYS,
                defaults.default_lead_time_days,
            ),
            default_min_stock: read(&lookup, ENV_DEFAULT_MIN_STOCK, defaults.default_min_stock),
            reorder_preview_len: read(
                &lookup,
                ENV_REORDER_PREVIEW_LEN,
                defaults.reorder_preview_len,
            ),
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.window_days == 0 {
            return Err(DomainError::validation("window_days must be positive"));
        }
        if self.default_lead_time_days == 0 {
            return Err(DomainError::validation(
                "default_lead_time_days must be positive",
            ));
        }
        if self.default_min_stock < 0 {
            return Err(DomainError::validation(
                "default_min_stock cannot be negative",
            ));
        }
        Ok(())
    }

    pub fn window(&self) -> TimeDelta {
        TimeDelta::days(i64::from(self.window_days))
    }

    pub fn with_window_days(mut self, days: u32) -> Self {
        self.window_days = days;
        self
    }

    pub fn with_reorder_preview_len(mut self, len: usize) -> Self {
        self.reorder_preview_len = len;
        self
    }
}

fn read<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display + Copy,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, value = %raw, error = %e, %default, "ignoring invalid setting; using default");
            default
        }
    }
}
