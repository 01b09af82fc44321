//! Derived analytics structures
//!
//! Outputs of the aggregation pipeline. Every type here is a fresh
//! value derived from a snapshot of fetched orders; nothing is mutated
//! after the aggregator returns it.

use super::line_item::ProductOption;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One calendar month of order activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthBucket {
    /// Sort key, `YYYY-MM`
    pub month_key: String,
    /// Chart label, e.g. "Jan 2025"
    pub display_label: String,
    pub total_spend: f64,
    pub order_count: i64,
    /// Spend within the month broken down by purchaser name
    pub per_employee_spend: HashMap<String, f64>,
}

/// Monthly spend series for the orders chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlySeries {
    /// Buckets sorted ascending by month key
    pub buckets: Vec<MonthBucket>,
    /// Display labels, parallel to `values`
    pub months: Vec<String>,
    /// Per-month spend totals, parallel to `months`
    pub values: Vec<f64>,
    /// Arithmetic mean of the per-month totals (0 when there are no months)
    pub average_monthly_spend: f64,
}

/// Order count for one status code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusBucket {
    pub status_code: String,
    pub count: i64,
    /// Resolved display name (falls back to the raw code)
    pub display_label: String,
    /// Resolved chart color (falls back to the default gray)
    pub color: String,
}

/// Spend and order count for one purchaser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeBucket {
    pub employee_name: String,
    pub total_spend: f64,
    pub order_count: i64,
}

/// Line items merged across the sampled orders, keyed by product name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAggregate {
    pub name: String,
    /// SKU of the first occurrence seen
    pub sku: String,
    pub total_quantity: i64,
    /// Number of line-item occurrences merged into this aggregate
    pub order_count: i64,
    /// Maximum unit price observed across occurrences
    pub best_price: f64,
    /// First non-empty option list encountered
    pub options: Vec<ProductOption>,
    /// Most recent payment date among contributing orders (epoch seconds)
    pub last_ordered_at: Option<i64>,
}

/// Headline figures for the fetched page of orders
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpendSummary {
    /// Sum of parseable order totals on the page
    pub total_spend: f64,
    /// Total order count reported by the API for the date range
    pub order_count: i64,
    /// `total_spend / order_count`, 0 when the count is 0
    pub spend_per_order: f64,
}
