//! Normalized order line items
//!
//! The upstream order detail document carries several competing price
//! fields with inconsistent presence. Instead of optional chaining over
//! all of them at every use site, the normalizer classifies each item
//! into an explicit pricing variant once; `unit_price` applies the
//! fallback priority.

use serde::{Deserialize, Serialize};

/// A selected product option (`Color: Blue`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOption {
    pub name: String,
    pub value: String,
}

/// How a line item's unit price is known
///
/// Priority when resolving a representative price:
/// base price, then tax-exclusive price, then total divided by
/// quantity, then 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LineItemPricing {
    /// Base (list) price per unit
    Base(f64),
    /// Tax-exclusive price per unit
    ExTax(f64),
    /// Only the tax-inclusive line total is known
    TotalWithQuantity { total: f64, quantity: i64 },
    /// No usable price field on the document
    Unpriced,
}

impl LineItemPricing {
    /// Resolve the unit price for this item
    pub fn unit_price(&self) -> f64 {
        match self {
            Self::Base(price) => *price,
            Self::ExTax(price) => *price,
            Self::TotalWithQuantity { total, quantity } => {
                if *quantity > 0 {
                    total / *quantity as f64
                } else {
                    0.0
                }
            }
            Self::Unpriced => 0.0,
        }
    }
}

/// One normalized line item from an order detail document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name (non-empty; unnamed items are dropped during normalization)
    pub name: String,
    pub sku: String,
    /// Quantity ordered (>= 1; unparsable quantities default to 1)
    pub quantity: i64,
    pub pricing: LineItemPricing,
    pub options: Vec<ProductOption>,
}

/// Normalized order detail: payment date plus line items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    pub order_id: i64,
    /// Payment creation time in epoch seconds, when the document has one
    pub payment_date: Option<i64>,
    pub line_items: Vec<LineItem>,
}
