//! CSV encodings for the two export downloads
//!
//! Fields are joined bare, with no quoting or escaping; a comma inside
//! a field shifts the columns of that row. Downstream consumers of
//! these files already tolerate the shifted rows, so the encoding stays
//! byte-compatible rather than correct.

use shared::error::AppResult;
use shared::models::{OrderNode, ProductAggregate};
use shared::util::{currency_format, distance_day, utc_date_string};
use std::path::{Path, PathBuf};

/// Encode the fetched orders as the orders-export CSV
///
/// Rows keep the input order. Missing fields render as empty columns,
/// except the total which renders as `$0.00`. Only the first thousands
/// separator of a formatted total is stripped.
pub fn orders_csv(orders: &[OrderNode]) -> String {
    let mut lines = vec!["Order ID,Date,Status,Total,Customer".to_string()];

    for order in orders {
        let id = order.order_id.map(|v| v.to_string()).unwrap_or_default();
        let date = order
            .created_at
            .and_then(utc_date_string)
            .unwrap_or_default();
        let status = order.status.clone().unwrap_or_default();
        let total = match order.parsed_total() {
            Some(value) => currency_format(value).replacen(',', "", 1),
            None => "$0.00".to_string(),
        };
        let customer = order.purchaser_name();

        lines.push(format!("{},{},{},{},{}", id, date, status, total, customer));
    }

    lines.join("\n")
}

/// Encode merged product aggregates as the purchased-items CSV
///
/// Rows are ordered by the Quantity column as written, descending;
/// unparsable quantities sort as zero. A zero price renders as `$0.00`.
pub fn purchased_items_csv(products: &[ProductAggregate]) -> String {
    let mut rows: Vec<[String; 6]> = products
        .iter()
        .map(|product| {
            let options = product
                .options
                .iter()
                .map(|opt| format!("{}: {}", opt.name, opt.value))
                .collect::<Vec<_>>()
                .join(", ");
            let last_ordered = product
                .last_ordered_at
                .and_then(utc_date_string)
                .unwrap_or_default();
            let price = if product.best_price != 0.0 {
                currency_format(product.best_price).replacen(',', "", 1)
            } else {
                "$0.00".to_string()
            };

            [
                product.name.clone(),
                product.sku.clone(),
                options,
                last_ordered,
                price,
                product.total_quantity.to_string(),
            ]
        })
        .collect();

    rows.sort_by_key(|row| std::cmp::Reverse(row[5].parse::<i64>().unwrap_or(0)));

    let mut lines =
        vec!["Product Name,SKU,Option Values,Last Ordered,Price (inc tax.),Quantity".to_string()];
    lines.extend(rows.iter().map(|row| row.join(",")));
    lines.join("\n")
}

/// Write the orders CSV to `<dir>/orders_export_<today>.csv`
pub fn export_orders(dir: &Path, orders: &[OrderNode]) -> AppResult<PathBuf> {
    let path = dir.join(format!("orders_export_{}.csv", distance_day(0)));
    std::fs::write(&path, orders_csv(orders))?;
    Ok(path)
}

/// Write the purchased-items CSV to `<dir>/purchased_items_<today>.csv`
pub fn export_purchased_items(dir: &Path, products: &[ProductAggregate]) -> AppResult<PathBuf> {
    let path = dir.join(format!("purchased_items_{}.csv", distance_day(0)));
    std::fs::write(&path, purchased_items_csv(products))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ProductOption;

    fn order(
        id: Option<i64>,
        created_at: Option<i64>,
        status: Option<&str>,
        total: Option<&str>,
        first: Option<&str>,
        last: Option<&str>,
    ) -> OrderNode {
        OrderNode {
            order_id: id,
            created_at,
            status: status.map(str::to_string),
            total_inc_tax: total.map(str::to_string),
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
        }
    }

    fn product(name: &str, quantity: i64) -> ProductAggregate {
        ProductAggregate {
            name: name.to_string(),
            sku: format!("SKU-{}", name),
            total_quantity: quantity,
            order_count: 1,
            best_price: 19.99,
            options: Vec::new(),
            last_ordered_at: Some(1_700_000_000),
        }
    }

    #[test]
    fn test_orders_row_shape() {
        let orders = vec![order(
            Some(1),
            Some(1_700_000_000),
            Some("Completed"),
            Some("19.99"),
            Some("Jane"),
            Some("Doe"),
        )];
        let csv = orders_csv(&orders);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Order ID,Date,Status,Total,Customer"));
        assert_eq!(lines.next(), Some("1,2023-11-14,Completed,$19.99,Jane Doe"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_orders_missing_fields_render_empty() {
        let orders = vec![order(None, None, None, None, None, None)];
        let csv = orders_csv(&orders);
        assert_eq!(csv.lines().nth(1), Some(",,,$0.00,"));
    }

    #[test]
    fn test_total_strips_only_first_comma() {
        let orders = vec![order(
            Some(2),
            None,
            None,
            Some("1234567.89"),
            Some("A"),
            None,
        )];
        let csv = orders_csv(&orders);
        assert_eq!(csv.lines().nth(1), Some("2,,,$1234,567.89,A"));
    }

    #[test]
    fn test_comma_in_product_name_is_not_escaped() {
        let mut p = product("Nuts, Bolts", 3);
        p.options = vec![ProductOption {
            name: "Size".to_string(),
            value: "M8".to_string(),
        }];
        let csv = purchased_items_csv(&[p]);
        assert_eq!(
            csv.lines().nth(1),
            Some("Nuts, Bolts,SKU-Nuts, Bolts,Size: M8,2023-11-14,$19.99,3")
        );
    }

    #[test]
    fn test_purchased_items_sorted_by_quantity_column() {
        let csv = purchased_items_csv(&[product("A", 2), product("B", 7), product("C", 4)]);
        let names: Vec<&str> = csv
            .lines()
            .skip(1)
            .map(|line| line.split(',').next().unwrap())
            .collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_zero_price_and_missing_date() {
        let mut p = product("Freebie", 1);
        p.best_price = 0.0;
        p.last_ordered_at = None;
        let csv = purchased_items_csv(&[p]);
        assert_eq!(csv.lines().nth(1), Some("Freebie,SKU-Freebie,,,$0.00,1"));
    }

    #[test]
    fn test_empty_exports_are_header_only() {
        assert_eq!(orders_csv(&[]), "Order ID,Date,Status,Total,Customer");
        assert_eq!(
            purchased_items_csv(&[]),
            "Product Name,SKU,Option Values,Last Ordered,Price (inc tax.),Quantity"
        );
    }
}
