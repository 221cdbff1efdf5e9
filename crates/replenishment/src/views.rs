//! Presentation-facing views built from a [`ReplenishmentReport`].
//!
//! The dashboard and the product list both read one report; neither
//! recomputes demand or status on its own.

use serde::{Deserialize, Serialize};

use stockwise_catalog::ProductFilter;
use stockwise_core::{ProductId, index_by_id};

use crate::engine::ReplenishmentReport;
use crate::portfolio::ReorderEntry;
use crate::snapshot::InventorySnapshot;
use crate::status::StatusTier;

/// Dashboard cards plus the reorder alerts panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub total_products: usize,
    pub reorder_count: usize,
    pub best_seller_name: Option<String>,
    pub inventory_value: f64,
    pub potential_revenue: f64,
    pub margin_percent: f64,
    /// Leading slice of the reorder list.
    pub alerts: Vec<ReorderEntry>,
    /// Reorder entries not shown in `alerts`.
    pub more_alerts: usize,
}

impl DashboardView {
    pub fn build(report: &ReplenishmentReport, preview_len: usize) -> Self {
        let summary = &report.summary;
        let alerts = summary.reorder_preview(preview_len).to_vec();
        Self {
            total_products: summary.total_products,
            reorder_count: summary.reorder_count,
            best_seller_name: summary.best_seller_name().map(str::to_owned),
            inventory_value: summary.inventory_value,
            potential_revenue: summary.potential_revenue,
            margin_percent: summary.margin_percent,
            more_alerts: summary.reorder_list.len() - alerts.len(),
            alerts,
        }
    }

    pub fn all_clear(&self) -> bool {
        self.alerts.is_empty()
    }
}

/// One product-list row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    pub product_id: ProductId,
    pub name: String,
    pub category: String,
    pub volume: String,
    pub current_stock: i64,
    pub min_stock: i64,
    pub daily_demand: f64,
    pub reorder_point: f64,
    pub status_tier: StatusTier,
    pub status_label: String,
    pub supplier_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListing {
    pub rows: Vec<ProductRow>,
}

impl ProductListing {
    /// Rows for the products in `snapshot` that pass `filter`, in input order.
    ///
    /// `report` must come from analyzing `snapshot`; products without a status
    /// in it are left out.
    pub fn build(
        snapshot: &InventorySnapshot,
        report: &ReplenishmentReport,
        filter: &ProductFilter,
    ) -> Self {
        let suppliers = index_by_id(&snapshot.suppliers);

        let rows = snapshot
            .products
            .iter()
            .enumerate()
            .filter(|(_, p)| filter.matches(p))
            .filter_map(|(i, p)| {
                let status = report
                    .per_product
                    .get(i)
                    .filter(|s| s.product_id == p.id)
                    .or_else(|| report.status_of(&p.id))?;
                let supplier_name = p
                    .supplier_id
                    .as_ref()
                    .and_then(|id| suppliers.get(id))
                    .map(|s| s.name.clone());
                Some(ProductRow {
                    product_id: p.id,
                    name: p.name.clone(),
                    category: p.category.clone(),
                    volume: p.volume.clone(),
                    current_stock: p.current_stock,
                    min_stock: status.min_stock,
                    daily_demand: status.daily_demand,
                    reorder_point: status.reorder_point,
                    status_tier: status.status_tier,
                    status_label: status.status_tier.label().to_string(),
                    supplier_name,
                })
            })
            .collect();

        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
