//! Trailing-window aggregation of outbound movements.

use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, Utc};

use stockwise_catalog::MovementRecord;
use stockwise_core::ProductId;

/// Outbound units per product inside the window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowedOutbound {
    totals: HashMap<ProductId, i64>,
}

impl WindowedOutbound {
    /// Units that left the shelf in the window; zero when none did.
    pub fn total_for(&self, product_id: &ProductId) -> i64 {
        self.totals.get(product_id).copied().unwrap_or(0)
    }

    /// Number of products with at least one qualifying movement.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProductId, i64)> + '_ {
        self.totals.iter().map(|(id, total)| (id, *total))
    }
}

/// Sum outbound quantities with `timestamp >= now - window`, per product.
///
/// Inbound records, records without a usable timestamp and records with a
/// non-positive quantity are skipped. Movements dated after `now` still
/// count. Totals saturate at `i64::MAX`.
pub fn outbound_totals(
    movements: &[MovementRecord],
    window: TimeDelta,
    now: DateTime<Utc>,
) -> WindowedOutbound {
    let cutoff = now
        .checked_sub_signed(window)
        .unwrap_or(DateTime::<Utc>::MIN_UTC);

    let mut totals: HashMap<ProductId, i64> = HashMap::new();
    let mut undated = 0usize;
    let mut non_positive = 0usize;

    for m in movements.iter().filter(|m| m.is_outbound()) {
        let Some(ts) = m.timestamp else {
            undated += 1;
            continue;
        };
        if ts < cutoff {
            continue;
        }
        if m.quantity <= 0 {
            non_positive += 1;
            continue;
        }
        let total = totals.entry(m.product_id).or_insert(0);
        *total = total.saturating_add(m.quantity);
    }

    if undated > 0 || non_positive > 0 {
        tracing::trace!(
            undated,
            non_positive,
            "skipped outbound movements without a usable timestamp or quantity"
        );
    }

    WindowedOutbound { totals }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use stockwise_catalog::MovementKind;
    use stockwise_core::{EstablishmentId, MovementId};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 30, 12, 0, 0).unwrap()
    }

    fn movement(
        product_id: ProductId,
        kind: MovementKind,
        quantity: i64,
        timestamp: Option<DateTime<Utc>>,
    ) -> MovementRecord {
        MovementRecord {
            id: MovementId::new(),
            establishment_id: EstablishmentId::new(),
            product_id,
            product_name: None,
            kind,
            quantity,
            timestamp,
            note: None,
        }
    }

    #[test]
    fn sums_outbound_per_product() {
        let a = ProductId::new();
        let b = ProductId::new();
        let recent = Some(now() - TimeDelta::days(2));
        let movements = vec![
            movement(a, MovementKind::Outbound, 4, recent),
            movement(b, MovementKind::Outbound, 1, recent),
            movement(a, MovementKind::Outbound, 6, recent),
        ];

        let totals = outbound_totals(&movements, TimeDelta::days(30), now());
        assert_eq!(totals.total_for(&a), 10);
        assert_eq!(totals.total_for(&b), 1);
        assert_eq!(totals.len(), 2);
    }

    #[test]
    fn inbound_movements_do_not_count() {
        let a = ProductId::new();
        let movements = vec![movement(a, MovementKind::Inbound, 50, Some(now()))];
        let totals = outbound_totals(&movements, TimeDelta::days(30), now());
        assert!(totals.is_empty());
        assert_eq!(totals.total_for(&a), 0);
    }

    #[test]
    fn window_boundary_is_inclusive() {
        let a = ProductId::new();
        let movements = vec![
            movement(a, MovementKind::Outbound, 3, Some(now() - TimeDelta::days(30))),
            movement(
                a,
                MovementKind::Outbound,
                100,
                Some(now() - TimeDelta::days(30) - TimeDelta::seconds(1)),
            ),
        ];
        let totals = outbound_totals(&movements, TimeDelta::days(30), now());
        assert_eq!(totals.total_for(&a), 3);
    }

    #[test]
    fn future_dated_movements_count() {
        let a = ProductId::new();
        let movements = vec![movement(
            a,
            MovementKind::Outbound,
            2,
            Some(now() + TimeDelta::days(1)),
        )];
        assert_eq!(
            outbound_totals(&movements, TimeDelta::days(30), now()).total_for(&a),
            2
        );
    }

    #[test]
    fn undated_movements_are_excluded() {
        let a = ProductId::new();
        let movements = vec![
            movement(a, MovementKind::Outbound, 9, None),
            movement(a, MovementKind::Outbound, 1, Some(now())),
        ];
        assert_eq!(
            outbound_totals(&movements, TimeDelta::days(30), now()).total_for(&a),
            1
        );
    }

    #[test]
    fn unknown_products_are_kept_in_the_map() {
        let stray = ProductId::new();
        let movements = vec![movement(stray, MovementKind::Outbound, 5, Some(now()))];
        let totals = outbound_totals(&movements, TimeDelta::days(30), now());
        assert_eq!(totals.iter().collect::<Vec<_>>(), vec![(&stray, 5)]);
    }

    #[test]
    fn non_positive_quantities_are_excluded() {
        let a = ProductId::new();
        let movements = vec![
            movement(a, MovementKind::Outbound, -300, Some(now())),
            movement(a, MovementKind::Outbound, 0, Some(now())),
        ];
        let totals = outbound_totals(&movements, TimeDelta::days(30), now());
        assert_eq!(totals.total_for(&a), 0);
        assert!(totals.is_empty());
    }

    #[test]
    fn negative_record_does_not_cancel_real_sales() {
        let a = ProductId::new();
        let movements = vec![
            movement(a, MovementKind::Outbound, 12, Some(now())),
            movement(a, MovementKind::Outbound, -300, Some(now())),
        ];
        assert_eq!(
            outbound_totals(&movements, TimeDelta::days(30), now()).total_for(&a),
            12
        );
    }

    #[test]
    fn huge_totals_saturate_instead_of_overflowing() {
        let a = ProductId::new();
        let movements = vec![
            movement(a, MovementKind::Outbound, i64::MAX, Some(now())),
            movement(a, MovementKind::Outbound, 1, Some(now())),
        ];
        assert_eq!(
            outbound_totals(&movements, TimeDelta::days(30), now()).total_for(&a),
            i64::MAX
        );
    }
}
