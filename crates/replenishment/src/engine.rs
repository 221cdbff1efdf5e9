use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockwise_catalog::{Product, ProductFilter, Supplier};
use stockwise_core::{DomainResult, EstablishmentId, ProductId, index_by_id};

use crate::forecast::daily_demand;
use crate::policy::ReplenishmentPolicy;
use crate::portfolio::{PortfolioSummary, summarize};
use crate::reorder::reorder_point;
use crate::snapshot::InventorySnapshot;
use crate::status::{StatusTier, classify};
use crate::views::{DashboardView, ProductListing};
use crate::window::outbound_totals;

/// Derived replenishment status of one product. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStatus {
    pub product_id: ProductId,
    /// Outbound units inside the window.
    pub outbound_in_window: i64,
    pub daily_demand: f64,
    /// Lead time applied after defaults.
    pub lead_time_days: u32,
    /// Safety stock applied after defaults.
    pub min_stock: i64,
    pub reorder_point: f64,
    pub status_tier: StatusTier,
}

/// Output of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplenishmentReport {
    pub establishment_id: EstablishmentId,
    /// The reference instant the window was anchored to.
    pub generated_at: DateTime<Utc>,
    pub window_days: u32,
    /// One entry per input product, in input order.
    pub per_product: Vec<ProductStatus>,
    pub summary: PortfolioSummary,
}

impl ReplenishmentReport {
    pub fn status_of(&self, product_id: &ProductId) -> Option<&ProductStatus> {
        self.per_product.iter().find(|s| &s.product_id == product_id)
    }
}

/// Stateless analytics engine. Holds only its policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplenishmentEngine {
    policy: ReplenishmentPolicy,
}

impl ReplenishmentEngine {
    pub fn new(policy: ReplenishmentPolicy) -> DomainResult<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// Engine configured from `STOCKWISE_*` environment variables.
    pub fn from_env() -> DomainResult<Self> {
        Self::new(ReplenishmentPolicy::from_env()?)
    }

    pub fn policy(&self) -> &ReplenishmentPolicy {
        &self.policy
    }

    /// Analyze `snapshot` with the window ending at `now`.
    pub fn analyze(&self, snapshot: &InventorySnapshot, now: DateTime<Utc>) -> ReplenishmentReport {
        let span = tracing::debug_span!(
            "replenishment.analyze",
            establishment_id = %snapshot.establishment_id,
            products = snapshot.products.len(),
            movements = snapshot.movements.len(),
            suppliers = snapshot.suppliers.len(),
        );
        let _enter = span.enter();

        let outbound = outbound_totals(&snapshot.movements, self.policy.window(), now);
        let suppliers = index_by_id(&snapshot.suppliers);

        let per_product: Vec<ProductStatus> = snapshot
            .products
            .iter()
            .map(|product| {
                let supplier = product
                    .supplier_id
                    .as_ref()
                    .and_then(|id| suppliers.get(id).copied());
                self.evaluate(product, supplier, outbound.total_for(&product.id))
            })
            .collect();

        let summary = summarize(&snapshot.products, &per_product);

        tracing::debug!(
            total_products = summary.total_products,
            reorder_count = summary.reorder_count,
            attention_count = summary.attention_count,
            inventory_value = summary.inventory_value,
            "replenishment analysis complete"
        );

        ReplenishmentReport {
            establishment_id: snapshot.establishment_id,
            generated_at: now,
            window_days: self.policy.window_days,
            per_product,
            summary,
        }
    }

    /// [`analyze`](Self::analyze) anchored at the current time.
    pub fn analyze_now(&self, snapshot: &InventorySnapshot) -> ReplenishmentReport {
        self.analyze(snapshot, Utc::now())
    }

    /// Status of a single product given its supplier (if it resolves) and its
    /// outbound units inside the window.
    pub fn evaluate(
        &self,
        product: &Product,
        supplier: Option<&Supplier>,
        outbound_in_window: i64,
    ) -> ProductStatus {
        let lead_time_days = supplier
            .map(|s| s.lead_time_or(self.policy.default_lead_time_days))
            .unwrap_or(self.policy.default_lead_time_days);
        let min_stock = product.min_stock_or(self.policy.default_min_stock);

        let daily_demand = daily_demand(outbound_in_window, self.policy.window_days);
        let reorder_point = reorder_point(daily_demand, lead_time_days, min_stock);
        let status_tier = classify(product.current_stock, min_stock, reorder_point);

        ProductStatus {
            product_id: product.id,
            outbound_in_window,
            daily_demand,
            lead_time_days,
            min_stock,
            reorder_point,
            status_tier,
        }
    }

    /// Dashboard call site: summary figures and the bounded reorder preview.
    pub fn dashboard(&self, snapshot: &InventorySnapshot, now: DateTime<Utc>) -> DashboardView {
        let report = self.analyze(snapshot, now);
        DashboardView::build(&report, self.policy.reorder_preview_len)
    }

    /// Product-list call site: filtered rows with their computed status.
    pub fn product_listing(
        &self,
        snapshot: &InventorySnapshot,
        filter: &ProductFilter,
        now: DateTime<Utc>,
    ) -> ProductListing {
        let report = self.analyze(snapshot, now);
        ProductListing::build(snapshot, &report, filter)
    }
}
