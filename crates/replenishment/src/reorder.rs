//! Reorder point: stock needed to cover the lead time, plus safety stock.

/// `daily_demand * lead_time_days + min_stock`. Not rounded or clamped.
pub fn reorder_point(daily_demand: f64, lead_time_days: u32, min_stock: i64) -> f64 {
    daily_demand * f64::from(lead_time_days) + min_stock as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_lead_time_plus_safety_stock() {
        assert_eq!(reorder_point(1.0, 3, 5), 8.0);
        assert_eq!(reorder_point(2.0, 5, 5), 15.0);
    }

    #[test]
    fn without_demand_it_is_the_safety_stock() {
        assert_eq!(reorder_point(0.0, 3, 5), 5.0);
        assert_eq!(reorder_point(0.0, 14, 12), 12.0);
    }

    #[test]
    fn keeps_fractions() {
        assert_eq!(reorder_point(0.5, 3, 5), 6.5);
    }
}
