use serde::{Deserialize, Serialize};

use stockwise_catalog::{MovementRecord, Product, Supplier};
use stockwise_core::EstablishmentId;

/// Everything the engine reads for one establishment.
///
/// Callers fetch a consistent set of products, movements and suppliers and
/// re-run the analysis whenever any of them changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySnapshot {
    pub establishment_id: EstablishmentId,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub movements: Vec<MovementRecord>,
    #[serde(default)]
    pub suppliers: Vec<Supplier>,
}

impl InventorySnapshot {
    pub fn new(establishment_id: EstablishmentId) -> Self {
        Self {
            establishment_id,
            products: Vec::new(),
            movements: Vec::new(),
            suppliers: Vec::new(),
        }
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub fn with_movements(mut self, movements: Vec<MovementRecord>) -> Self {
        self.movements = movements;
        self
    }

    pub fn with_suppliers(mut self, suppliers: Vec<Supplier>) -> Self {
        self.suppliers = suppliers;
        self
    }
}
