//! Stock-position classification.

use serde::{Deserialize, Serialize};

/// Urgency tier of a product's stock position.
///
/// Re-derived on every analysis; never persisted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTier {
    Ok,
    /// Above the safety floor but at or below the reorder point.
    Attention,
    /// At or below the safety floor.
    Reorder,
}

impl StatusTier {
    /// Priority rank, most urgent first.
    pub fn rank(self) -> u8 {
        match self {
            StatusTier::Reorder => 0,
            StatusTier::Attention => 1,
            StatusTier::Ok => 2,
        }
    }

    pub fn needs_restock(self) -> bool {
        !matches!(self, StatusTier::Ok)
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusTier::Ok => "Stock OK",
            StatusTier::Attention => "Attention",
            StatusTier::Reorder => "Reorder Now",
        }
    }
}

impl core::fmt::Display for StatusTier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a stock position. The safety floor is checked first, so a product
/// at or below `min_stock` is `Reorder` whatever its reorder point says.
pub fn classify(current_stock: i64, min_stock: i64, reorder_point: f64) -> StatusTier {
    if current_stock <= min_stock {
        StatusTier::Reorder
    } else if current_stock as f64 <= reorder_point {
        StatusTier::Attention
    } else {
        StatusTier::Ok
    }
}
