//! `stockwise-replenishment`
//!
//! Stock-replenishment analytics for one establishment. For every product it
//! forecasts daily demand from recent outbound movements, derives a reorder
//! point from the supplier's lead time and the safety-stock floor, and
//! classifies the stock position. The per-product results roll up into a
//! portfolio summary (valuation, margin, best seller, prioritized reorder list).
//!
//! Everything here is pure and synchronous: inputs are borrowed, never
//! mutated, and the same snapshot analyzed at the same instant always yields
//! the same report. The reference instant is a parameter; only
//! [`ReplenishmentEngine::analyze_now`] reads the clock.
//!
//! Pipeline, leaf-first:
//! [`window`] → [`forecast`] → [`reorder`] → [`status`] → [`portfolio`].

pub mod engine;
pub mod forecast;
pub mod policy;
pub mod portfolio;
pub mod reorder;
pub mod snapshot;
pub mod status;
pub mod views;
pub mod window;

pub use engine::{ProductStatus, ReplenishmentEngine, ReplenishmentReport};
pub use policy::ReplenishmentPolicy;
pub use portfolio::{BestSeller, PortfolioSummary, ReorderEntry};
pub use snapshot::InventorySnapshot;
pub use status::StatusTier;
pub use views::{DashboardView, ProductListing, ProductRow};
pub use window::WindowedOutbound;
