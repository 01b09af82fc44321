//! Order status lookup
//!
//! Status codes are resolved to a display name and chart color through
//! the [`StatusLookup`] trait so the aggregation functions stay pure
//! and the table can be swapped in tests. [`PortalStatusLookup`] is the
//! built-in table for the storefront's order statuses.

use serde::{Deserialize, Serialize};

/// Fallback chart color for statuses the lookup does not know
pub const DEFAULT_STATUS_COLOR: &str = "#9e9e9e";

/// Display metadata for an order status code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMeta {
    pub name: String,
    pub color: String,
}

impl StatusMeta {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Resolves status codes to display metadata
pub trait StatusLookup {
    /// Look up a status code; `None` when the code is unknown
    fn resolve(&self, code: &str) -> Option<StatusMeta>;
}

/// Built-in status table for the storefront order workflow
#[derive(Debug, Clone, Copy, Default)]
pub struct PortalStatusLookup;

impl StatusLookup for PortalStatusLookup {
    fn resolve(&self, code: &str) -> Option<StatusMeta> {
        let (name, color) = match code {
            "Incomplete" => ("Incomplete", "#757575"),
            "Pending" => ("Pending", "#ff9800"),
            "Awaiting Payment" => ("Awaiting Payment", "#ffc107"),
            "Awaiting Fulfillment" => ("Awaiting Fulfillment", "#03a9f4"),
            "Awaiting Shipment" => ("Awaiting Shipment", "#00bcd4"),
            "Awaiting Pickup" => ("Awaiting Pickup", "#009688"),
            "Partially Shipped" => ("Partially Shipped", "#8bc34a"),
            "Shipped" => ("Shipped", "#2e7d32"),
            "Completed" => ("Completed", "#4caf50"),
            "Cancelled" => ("Cancelled", "#f44336"),
            "Declined" => ("Declined", "#d32f2f"),
            "Refunded" => ("Refunded", "#9c27b0"),
            "Partially Refunded" => ("Partially Refunded", "#ba68c8"),
            "Disputed" => ("Disputed", "#e91e63"),
            "Manual Verification Required" => ("Manual Verification Required", "#607d8b"),
            _ => return None,
        };
        Some(StatusMeta::new(name, color))
    }
}
