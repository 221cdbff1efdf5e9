//! Portfolio rollup over per-product results.

use serde::{Deserialize, Serialize};

use stockwise_catalog::Product;
use stockwise_core::ProductId;

use crate::engine::ProductStatus;
use crate::status::StatusTier;

/// Product with the most outbound units in the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestSeller {
    pub product_id: ProductId,
    pub name: String,
    pub units_sold: i64,
}

/// One row of the prioritized reorder list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderEntry {
    pub product_id: ProductId,
    pub name: String,
    pub category: String,
    pub volume: String,
    pub current_stock: i64,
    pub reorder_point: f64,
    pub status_tier: StatusTier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_products: usize,
    pub reorder_count: usize,
    pub attention_count: usize,
    pub best_seller: Option<BestSeller>,
    /// Cost of stock on hand: Σ current_stock × purchase_price.
    pub inventory_value: f64,
    /// Σ current_stock × sell_price.
    pub potential_revenue: f64,
    /// Markup over cost, in percent. Zero when there is no valued stock.
    pub margin_percent: f64,
    /// Every `Reorder` entry, then every `Attention` entry, each group in
    /// input order.
    pub reorder_list: Vec<ReorderEntry>,
}

impl PortfolioSummary {
    pub fn empty() -> Self {
        Self {
            total_products: 0,
            reorder_count: 0,
            attention_count: 0,
            best_seller: None,
            inventory_value: 0.0,
            potential_revenue: 0.0,
            margin_percent: 0.0,
            reorder_list: Vec::new(),
        }
    }

    pub fn best_seller_name(&self) -> Option<&str> {
        self.best_seller.as_ref().map(|b| b.name.as_str())
    }

    /// The first `limit` reorder entries, for display.
    pub fn reorder_preview(&self, limit: usize) -> &[ReorderEntry] {
        &self.reorder_list[..self.reorder_list.len().min(limit)]
    }
}

/// Fold products and their statuses into a summary.
///
/// `statuses[i]` must describe `products[i]`; surplus entries on either side
/// are ignored.
pub fn summarize(products: &[Product], statuses: &[ProductStatus]) -> PortfolioSummary {
    let mut summary = PortfolioSummary::empty();
    summary.total_products = products.len();

    let mut best: Option<(&Product, i64)> = None;
    let mut flagged: Vec<(u8, usize, ReorderEntry)> = Vec::new();

    for (index, (product, status)) in products.iter().zip(statuses).enumerate() {
        match status.status_tier {
            StatusTier::Reorder => summary.reorder_count += 1,
            StatusTier::Attention => summary.attention_count += 1,
            StatusTier::Ok => {}
        }

        // Strictly greater: the earliest product keeps a tie.
        let sold = status.outbound_in_window;
        if sold > best.map_or(0, |(_, units)| units) {
            best = Some((product, sold));
        }

        if status.status_tier.needs_restock() {
            flagged.push((
                status.status_tier.rank(),
                index,
                ReorderEntry {
                    product_id: product.id,
                    name: product.name.clone(),
                    category: product.category.clone(),
                    volume: product.volume.clone(),
                    current_stock: product.current_stock,
                    reorder_point: status.reorder_point,
                    status_tier: status.status_tier,
                },
            ));
        }
    }

    summary.best_seller = best.map(|(product, units_sold)| BestSeller {
        product_id: product.id,
        name: product.name.clone(),
        units_sold,
    });

    summary.inventory_value = products.iter().fold(0.0, |acc, p| acc + p.stock_cost());
    summary.potential_revenue = products.iter().fold(0.0, |acc, p| acc + p.stock_revenue());
    summary.margin_percent = margin_percent(summary.inventory_value, summary.potential_revenue);

    flagged.sort_by_key(|(rank, index, _)| (*rank, *index));
    summary.reorder_list = flagged.into_iter().map(|(_, _, entry)| entry).collect();

    summary
}

/// `(revenue - cost) / cost * 100`, or zero when `cost` is not positive.
pub fn margin_percent(cost: f64, revenue: f64) -> f64 {
    if cost > 0.0 {
        (revenue - cost) / cost * 100.0
    } else {
        0.0
    }
}
