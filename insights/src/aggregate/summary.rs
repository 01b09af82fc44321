//! Spend Summary

use shared::models::{OrderNode, SpendSummary};

/// Compute the headline figures for a fetched page of orders
///
/// `total_count` is the range-wide order count reported by the API, not
/// the page length, so `spend_per_order` divides the page's parseable
/// spend by the full count.
pub fn summarize_spend(orders: &[OrderNode], total_count: i64) -> SpendSummary {
    let total_spend: f64 = orders.iter().filter_map(OrderNode::parsed_total).sum();
    let spend_per_order = if total_count > 0 {
        total_spend / total_count as f64
    } else {
        0.0
    };

    SpendSummary {
        total_spend,
        order_count: total_count,
        spend_per_order,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(total: Option<&str>) -> OrderNode {
        OrderNode {
            total_inc_tax: total.map(str::to_string),
            ..OrderNode::default()
        }
    }

    #[test]
    fn test_sums_parseable_totals_only() {
        let orders = vec![order(Some("10.00")), order(Some("oops")), order(None)];
        let summary = summarize_spend(&orders, 3);
        assert_eq!(summary.total_spend, 10.0);
        assert_eq!(summary.order_count, 3);
        assert!((summary.spend_per_order - 10.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_count_guards_division() {
        let summary = summarize_spend(&[], 0);
        assert_eq!(summary, SpendSummary::default());
    }
}
