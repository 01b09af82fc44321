//! Provider order-detail document normalization
//!
//! The provider's detail document is loosely shaped: price and quantity
//! fields arrive as strings or numbers, option fields switch between
//! snake_case and camelCase, and any of the three price fields may be
//! absent. Normalization happens once here so the rest of the
//! workspace only sees [`OrderDetail`] and [`LineItem`].

use serde::Deserialize;
use serde_json::Value;
use shared::models::{LineItem, LineItemPricing, OrderDetail, ProductOption};

/// Raw order detail document as returned by the detail endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawOrderDetail {
    pub payment: Option<RawPayment>,
    pub products: Vec<RawOrderProduct>,
}

/// Payment block of the raw document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPayment {
    /// Payment creation time, epoch seconds as string or number
    #[serde(alias = "dateCreateAt")]
    pub date_create_at: Option<Value>,
}

/// One product row of the raw document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawOrderProduct {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub quantity: Option<Value>,
    #[serde(alias = "basePrice")]
    pub base_price: Option<Value>,
    #[serde(alias = "priceExTax")]
    pub price_ex_tax: Option<Value>,
    #[serde(alias = "totalIncTax")]
    pub total_inc_tax: Option<Value>,
    #[serde(alias = "productOptions")]
    pub product_options: Vec<RawProductOption>,
}

/// One selected option of a raw product row
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawProductOption {
    #[serde(alias = "displayName")]
    pub display_name: Option<String>,
    #[serde(alias = "displayValue")]
    pub display_value: Option<String>,
}

/// Normalize a raw detail document into the shared model
///
/// Items without a product name are dropped; quantity defaults to 1
/// when missing or unparsable; the pricing variant records which price
/// field the document actually carried.
pub fn normalize_order_detail(order_id: i64, raw: RawOrderDetail) -> OrderDetail {
    let payment_date = raw
        .payment
        .as_ref()
        .and_then(|p| value_i64(p.date_create_at.as_ref()));

    let line_items = raw
        .products
        .into_iter()
        .filter_map(normalize_product)
        .collect();

    OrderDetail {
        order_id,
        payment_date,
        line_items,
    }
}

fn normalize_product(raw: RawOrderProduct) -> Option<LineItem> {
    let name = raw.name.as_deref().unwrap_or("").trim().to_string();
    if name.is_empty() {
        return None;
    }

    let raw_quantity = value_i64(raw.quantity.as_ref());
    let quantity = raw_quantity.filter(|q| *q >= 1).unwrap_or(1);

    let pricing = if let Some(base) = value_f64(raw.base_price.as_ref()) {
        LineItemPricing::Base(base)
    } else if let Some(ex_tax) = value_f64(raw.price_ex_tax.as_ref()) {
        LineItemPricing::ExTax(ex_tax)
    } else if let (Some(total), Some(q)) = (value_f64(raw.total_inc_tax.as_ref()), raw_quantity) {
        LineItemPricing::TotalWithQuantity { total, quantity: q }
    } else {
        LineItemPricing::Unpriced
    };

    let options = raw
        .product_options
        .into_iter()
        .filter_map(|opt| {
            let name = opt.display_name?.trim().to_string();
            if name.is_empty() {
                return None;
            }
            Some(ProductOption {
                name,
                value: opt.display_value.unwrap_or_default(),
            })
        })
        .collect();

    Some(LineItem {
        name,
        sku: raw.sku.unwrap_or_default(),
        quantity,
        pricing,
        options,
    })
}

/// Read an f64 from a JSON value that may be a number or numeric string
fn value_f64(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Read an i64 from a JSON value that may be a number or numeric string
fn value_i64(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> RawOrderDetail {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_normalize_full_document() {
        let raw = parse(
            r#"{
                "payment": { "dateCreateAt": "1700000000" },
                "products": [
                    {
                        "name": "Widget",
                        "sku": "W-1",
                        "quantity": "3",
                        "base_price": "12.50",
                        "product_options": [
                            { "display_name": "Color", "display_value": "Blue" }
                        ]
                    }
                ]
            }"#,
        );
        let detail = normalize_order_detail(7, raw);
        assert_eq!(detail.order_id, 7);
        assert_eq!(detail.payment_date, Some(1_700_000_000));
        assert_eq!(detail.line_items.len(), 1);

        let item = &detail.line_items[0];
        assert_eq!(item.name, "Widget");
        assert_eq!(item.sku, "W-1");
        assert_eq!(item.quantity, 3);
        assert_eq!(item.pricing, LineItemPricing::Base(12.5));
        assert_eq!(item.options[0].name, "Color");
        assert_eq!(item.options[0].value, "Blue");
    }

    #[test]
    fn test_price_priority_base_over_ex_tax() {
        let raw = parse(
            r#"{"products": [{"name": "A", "base_price": 10, "price_ex_tax": 8}]}"#,
        );
        let detail = normalize_order_detail(1, raw);
        assert_eq!(detail.line_items[0].pricing, LineItemPricing::Base(10.0));
    }

    #[test]
    fn test_price_falls_back_to_ex_tax_then_total() {
        let raw = parse(r#"{"products": [{"name": "A", "price_ex_tax": "8.25"}]}"#);
        let detail = normalize_order_detail(1, raw);
        assert_eq!(detail.line_items[0].pricing, LineItemPricing::ExTax(8.25));

        let raw = parse(r#"{"products": [{"name": "A", "total_inc_tax": 30, "quantity": 3}]}"#);
        let detail = normalize_order_detail(1, raw);
        assert_eq!(
            detail.line_items[0].pricing,
            LineItemPricing::TotalWithQuantity {
                total: 30.0,
                quantity: 3
            }
        );
        assert_eq!(detail.line_items[0].pricing.unit_price(), 10.0);
    }

    #[test]
    fn test_unpriced_when_no_price_fields() {
        let raw = parse(r#"{"products": [{"name": "A", "quantity": 2}]}"#);
        let detail = normalize_order_detail(1, raw);
        assert_eq!(detail.line_items[0].pricing, LineItemPricing::Unpriced);
        assert_eq!(detail.line_items[0].pricing.unit_price(), 0.0);
    }

    #[test]
    fn test_total_without_quantity_is_unpriced() {
        let raw = parse(r#"{"products": [{"name": "A", "total_inc_tax": 30}]}"#);
        let detail = normalize_order_detail(1, raw);
        assert_eq!(detail.line_items[0].pricing, LineItemPricing::Unpriced);
    }

    #[test]
    fn test_camel_case_aliases() {
        let raw = parse(
            r#"{
                "payment": { "dateCreateAt": 1700000000 },
                "products": [
                    {
                        "name": "B",
                        "basePrice": "5.00",
                        "productOptions": [
                            { "displayName": "Size", "displayValue": "XL" }
                        ]
                    }
                ]
            }"#,
        );
        let detail = normalize_order_detail(2, raw);
        assert_eq!(detail.payment_date, Some(1_700_000_000));
        assert_eq!(detail.line_items[0].pricing, LineItemPricing::Base(5.0));
        assert_eq!(detail.line_items[0].options[0].name, "Size");
    }

    #[test]
    fn test_unnamed_items_are_dropped() {
        let raw = parse(r#"{"products": [{"sku": "X"}, {"name": "  "}, {"name": "Keep"}]}"#);
        let detail = normalize_order_detail(3, raw);
        assert_eq!(detail.line_items.len(), 1);
        assert_eq!(detail.line_items[0].name, "Keep");
    }

    #[test]
    fn test_unparsable_quantity_defaults_to_one() {
        let raw = parse(r#"{"products": [{"name": "A", "quantity": "lots"}]}"#);
        let detail = normalize_order_detail(4, raw);
        assert_eq!(detail.line_items[0].quantity, 1);
    }
}
