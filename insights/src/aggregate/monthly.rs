//! Monthly Spend Aggregation
//!
//! Groups orders by UTC calendar month and produces the parallel
//! label/value arrays the spend chart consumes. An order contributes
//! only when it carries a creation timestamp, a parseable total and a
//! purchaser first name; failing any of the three excludes it from
//! every bucket.

use shared::models::{MonthBucket, MonthlySeries, OrderNode};
use shared::util::{datetime_from_epoch, month_key, month_label};
use std::collections::{BTreeMap, HashMap};

/// Build the monthly spend series from one page of orders
///
/// Buckets come back sorted ascending by `YYYY-MM` key regardless of
/// the input order. `average_monthly_spend` is the mean over the months
/// that actually have orders, not over the full date range.
pub fn aggregate_monthly(orders: &[OrderNode]) -> MonthlySeries {
    let mut by_month: BTreeMap<String, MonthBucket> = BTreeMap::new();

    for order in orders {
        if order.first_name.as_deref().unwrap_or("").trim().is_empty() {
            continue;
        }
        let Some(created_at) = order.created_at else {
            continue;
        };
        let Some(dt) = datetime_from_epoch(created_at) else {
            continue;
        };
        let Some(total) = order.parsed_total() else {
            continue;
        };

        let key = month_key(&dt);
        let bucket = by_month.entry(key.clone()).or_insert_with(|| MonthBucket {
            month_key: key,
            display_label: month_label(&dt),
            total_spend: 0.0,
            order_count: 0,
            per_employee_spend: HashMap::new(),
        });
        bucket.total_spend += total;
        bucket.order_count += 1;
        *bucket
            .per_employee_spend
            .entry(order.purchaser_name())
            .or_insert(0.0) += total;
    }

    let buckets: Vec<MonthBucket> = by_month.into_values().collect();
    let months = buckets.iter().map(|b| b.display_label.clone()).collect();
    let values: Vec<f64> = buckets.iter().map(|b| b.total_spend).collect();
    let average_monthly_spend = if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    };

    MonthlySeries {
        buckets,
        months,
        values,
        average_monthly_spend,
    }
}
