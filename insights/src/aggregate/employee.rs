//! Employee Spend Aggregation

use shared::models::{EmployeeBucket, OrderNode};
use std::cmp::Ordering;

/// Number of employees shown on the leaderboard
pub const TOP_EMPLOYEES: usize = 10;

/// Rank purchasers by total spend across the given orders
///
/// An order contributes only when its total parses and its purchaser
/// name is non-empty after trimming. The result is sorted by spend
/// descending and capped at [`TOP_EMPLOYEES`]; ties keep first-seen
/// order.
pub fn aggregate_employees(orders: &[OrderNode]) -> Vec<EmployeeBucket> {
    let mut buckets: Vec<EmployeeBucket> = Vec::new();

    for order in orders {
        let Some(total) = order.parsed_total() else {
            continue;
        };
        let name = order.purchaser_name();
        if name.is_empty() {
            continue;
        }
        match buckets.iter_mut().find(|b| b.employee_name == name) {
            Some(bucket) => {
                bucket.total_spend += total;
                bucket.order_count += 1;
            }
            None => buckets.push(EmployeeBucket {
                employee_name: name,
                total_spend: total,
                order_count: 1,
            }),
        }
    }

    buckets.sort_by(|a, b| {
        b.total_spend
            .partial_cmp(&a.total_spend)
            .unwrap_or(Ordering::Equal)
    });
    buckets.truncate(TOP_EMPLOYEES);
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(total: Option<&str>, first: Option<&str>, last: Option<&str>) -> OrderNode {
        OrderNode {
            total_inc_tax: total.map(str::to_string),
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
            ..OrderNode::default()
        }
    }

    #[test]
    fn test_ranks_by_total_spend_descending() {
        let orders = vec![
            order(Some("10.00"), Some("Jane"), Some("Doe")),
            order(Some("50.00"), Some("Bob"), Some("Ray")),
            order(Some("15.00"), Some("Jane"), Some("Doe")),
        ];
        let buckets = aggregate_employees(&orders);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].employee_name, "Bob Ray");
        assert_eq!(buckets[0].total_spend, 50.0);
        assert_eq!(buckets[0].order_count, 1);
        assert_eq!(buckets[1].employee_name, "Jane Doe");
        assert_eq!(buckets[1].total_spend, 25.0);
        assert_eq!(buckets[1].order_count, 2);
    }

    #[test]
    fn test_caps_at_top_ten_non_increasing() {
        let orders: Vec<OrderNode> = (0..15)
            .map(|i| {
                order(
                    Some(&format!("{}.00", (i + 1) * 10)),
                    Some(&format!("Emp{}", i)),
                    None,
                )
            })
            .collect();
        let buckets = aggregate_employees(&orders);

        assert_eq!(buckets.len(), TOP_EMPLOYEES);
        for pair in buckets.windows(2) {
            assert!(pair[0].total_spend >= pair[1].total_spend);
        }
        assert_eq!(buckets[0].employee_name, "Emp14");
    }

    #[test]
    fn test_skips_unparsable_totals_and_empty_names() {
        let orders = vec![
            order(Some("abc"), Some("Jane"), Some("Doe")),
            order(None, Some("Jane"), Some("Doe")),
            order(Some("10.00"), None, None),
            order(Some("10.00"), Some("  "), Some(" ")),
        ];
        assert!(aggregate_employees(&orders).is_empty());
    }

    #[test]
    fn test_single_name_part_counts() {
        let orders = vec![order(Some("5.00"), Some("Cher"), None)];
        let buckets = aggregate_employees(&orders);
        assert_eq!(buckets[0].employee_name, "Cher");
    }
}
