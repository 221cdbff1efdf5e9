use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockwise_core::{DomainError, DomainResult, Entity, EstablishmentId, MovementId, ProductId};

use crate::product::Product;
use crate::serde_util::{lenient_count, lenient_timestamp};

/// Direction of a stock movement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    /// Units received (purchase, return to stock).
    #[serde(alias = "Inbound", alias = "IN", alias = "in")]
    Inbound,
    /// Units leaving the shelf (sales). These drive demand forecasting.
    #[serde(alias = "Outbound", alias = "OUT", alias = "out")]
    Outbound,
}

impl MovementKind {
    /// Signed change to on-hand stock for `quantity` units.
    pub fn signed(self, quantity: i64) -> i64 {
        match self {
            MovementKind::Inbound => quantity,
            MovementKind::Outbound => -quantity,
        }
    }
}

/// A recorded stock movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementRecord {
    pub id: MovementId,
    pub establishment_id: EstablishmentId,
    pub product_id: ProductId,
    /// Product name denormalized by the API for movement listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    pub kind: MovementKind,
    /// `0` when the stored value was missing or unreadable.
    #[serde(default, deserialize_with = "lenient_count")]
    pub quantity: i64,
    /// `None` when the stored value was missing or unreadable.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl MovementRecord {
    pub fn is_outbound(&self) -> bool {
        self.kind == MovementKind::Outbound
    }
}

impl Entity for MovementRecord {
    type Id = MovementId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Command: record a movement against a product's current stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMovement {
    pub movement_id: MovementId,
    pub establishment_id: EstablishmentId,
    pub product_id: ProductId,
    pub kind: MovementKind,
    pub quantity: i64,
    pub note: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

/// Event: MovementRecorded.
///
/// Carries the record to persist and the stock level it leaves behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementRecorded {
    pub record: MovementRecord,
    pub previous_stock: i64,
    pub new_stock: i64,
}

impl Product {
    /// Decide whether `cmd` may be recorded. Does not mutate the product.
    pub fn handle_movement(&self, cmd: &RecordMovement) -> DomainResult<MovementRecorded> {
        if cmd.product_id != self.id {
            return Err(DomainError::invariant("product_id mismatch"));
        }
        if cmd.establishment_id != self.establishment_id {
            return Err(DomainError::invariant("establishment mismatch"));
        }
        if cmd.quantity <= 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        if cmd.kind == MovementKind::Outbound && cmd.quantity > self.current_stock {
            return Err(DomainError::insufficient_stock(
                self.current_stock,
                cmd.quantity,
            ));
        }

        let new_stock = self.current_stock + cmd.kind.signed(cmd.quantity);
        tracing::debug!(
            product_id = %self.id,
            kind = ?cmd.kind,
            quantity = cmd.quantity,
            new_stock,
            "movement accepted"
        );

        Ok(MovementRecorded {
            record: MovementRecord {
                id: cmd.movement_id,
                establishment_id: cmd.establishment_id,
                product_id: cmd.product_id,
                product_name: Some(self.name.clone()),
                kind: cmd.kind,
                quantity: cmd.quantity,
                timestamp: Some(cmd.occurred_at),
                note: cmd.note.clone().filter(|n| !n.trim().is_empty()),
            },
            previous_stock: self.current_stock,
            new_stock,
        })
    }

    /// Evolve the product from an accepted movement.
    pub fn apply_movement(&mut self, event: &MovementRecorded) {
        self.current_stock = event.new_stock;
        if event.record.timestamp.is_some() {
            self.updated_at = event.record.timestamp;
        }
    }
}
