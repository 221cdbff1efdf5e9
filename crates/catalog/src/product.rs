use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockwise_core::{DomainError, DomainResult, Entity, EstablishmentId, ProductId, SupplierId};

use crate::serde_util::{
    blank_as_none, lenient_count, lenient_optional_count, lenient_timestamp, null_as_default,
};

/// A product sold by an establishment.
///
/// Fields mirror the storage API's record. Numeric fields the API may omit or
/// null out fall back to zero; `min_stock` keeps its absence so callers can
/// apply their own safety-stock default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub establishment_id: EstablishmentId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    /// Unit descriptor, e.g. "600ml" or "Bottle".
    #[serde(default, deserialize_with = "null_as_default")]
    pub volume: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub current_stock: i64,
    #[serde(default, deserialize_with = "lenient_optional_count")]
    pub min_stock: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub purchase_price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sell_price: f64,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub supplier_id: Option<SupplierId>,
    /// Legacy status string persisted by older clients. Carried through
    /// untouched; stock status is always recomputed from current data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// A product with zero stock, no prices and no supplier.
    pub fn new(id: ProductId, establishment_id: EstablishmentId, name: impl Into<String>) -> Self {
        Self {
            id,
            establishment_id,
            name: name.into(),
            category: String::new(),
            volume: String::new(),
            current_stock: 0,
            min_stock: None,
            purchase_price: 0.0,
            sell_price: 0.0,
            supplier_id: None,
            status: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Safety-stock floor, with `default` standing in for an unset or zero value.
    pub fn min_stock_or(&self, default: i64) -> i64 {
        self.min_stock.filter(|&v| v != 0).unwrap_or(default)
    }

    /// Cost of the units on hand.
    pub fn stock_cost(&self) -> f64 {
        self.current_stock as f64 * self.purchase_price
    }

    /// Revenue if every unit on hand sold at the listed price.
    pub fn stock_revenue(&self) -> f64 {
        self.current_stock as f64 * self.sell_price
    }

    /// Check the record before it is written.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        ensure_price("purchase_price", self.purchase_price)?;
        ensure_price("sell_price", self.sell_price)?;
        if let Some(min) = self.min_stock {
            if min < 0 {
                return Err(DomainError::validation("min_stock cannot be negative"));
            }
        }
        Ok(())
    }
}

fn ensure_price(field: &str, value: f64) -> DomainResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(DomainError::validation(format!(
            "{field} must be a finite, non-negative amount (got {value})"
        )));
    }
    Ok(())
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
