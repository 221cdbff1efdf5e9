//! Average daily demand from windowed outbound totals.

/// `windowed_total / divisor_days`.
///
/// The divisor is the window length, not the span of history actually
/// observed: a product first sold five days ago is still averaged over the
/// whole window.
///
/// A zero divisor yields `0.0`. The engine never passes one, since a policy
/// with a zero-day window fails validation; the guard is for direct callers.
pub fn daily_demand(windowed_total: i64, divisor_days: u32) -> f64 {
    if divisor_days == 0 {
        return 0.0;
    }
    windowed_total as f64 / f64::from(divisor_days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_over_the_full_window() {
        assert_eq!(daily_demand(30, 30), 1.0);
        assert_eq!(daily_demand(60, 30), 2.0);
        assert_eq!(daily_demand(15, 30), 0.5);
    }

    #[test]
    fn no_sales_means_no_demand() {
        assert_eq!(daily_demand(0, 30), 0.0);
    }

    #[test]
    fn short_history_is_not_rescaled() {
        // Five units sold over the last five days still average over 30.
        assert_eq!(daily_demand(5, 30), 5.0 / 30.0);
    }

    #[test]
    fn zero_divisor_yields_zero() {
        assert_eq!(daily_demand(10, 0), 0.0);
    }
}
