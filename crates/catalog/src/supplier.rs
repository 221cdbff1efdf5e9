use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockwise_core::{DomainError, DomainResult, Entity, EstablishmentId, SupplierId};

use crate::serde_util::lenient_timestamp;

/// A supplier that replenishes an establishment's products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: SupplierId,
    pub establishment_id: EstablishmentId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Days between placing an order and receiving it.
    #[serde(default)]
    pub lead_time_days: Option<u32>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Supplier {
    pub fn new(id: SupplierId, establishment_id: EstablishmentId, name: impl Into<String>) -> Self {
        Self {
            id,
            establishment_id,
            name: name.into(),
            phone: None,
            lead_time_days: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_lead_time_days(mut self, days: u32) -> Self {
        self.lead_time_days = Some(days);
        self
    }

    /// Lead time, with `default` standing in for an unset or zero value.
    pub fn lead_time_or(&self, default: u32) -> u32 {
        self.lead_time_days.filter(|&d| d > 0).unwrap_or(default)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("supplier name cannot be empty"));
        }
        Ok(())
    }
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
