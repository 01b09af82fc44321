//! Popular Product Aggregation
//!
//! The only aggregator that fetches on its own: it scans one wide page
//! of recent orders, samples the newest few, pulls their detail
//! documents concurrently and merges line items by product name.

use crate::range::DateRange;
use futures::future::try_join_all;
use portal_client::{ClientError, OrderDetailFetcher, OrderFetcher};
use shared::error::AppResult;
use shared::models::{OrderDetail, OrderListParams, ProductAggregate};

/// Page size of the recent-order scan
pub const PRODUCT_SCAN_PAGE_SIZE: i64 = 50;
/// How many of the newest orders get their details fetched
pub const DETAIL_SAMPLE_LIMIT: usize = 10;
/// Display-mode cap on the merged product list
pub const TOP_PRODUCTS: usize = 10;

/// How the merged product list is shaped for its consumer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductMode {
    /// Sorted by quantity descending, capped at [`TOP_PRODUCTS`]
    Display,
    /// Untruncated, in first-seen order, for the CSV export
    Export,
}

/// Fetch and merge the popular products for a date range
///
/// Detail fetches run concurrently and the whole sample fails as one
/// unit: any failed detail fetch fails the aggregate. An empty order
/// scan yields an empty list without touching the detail endpoint.
pub async fn aggregate_products(
    orders: &dyn OrderFetcher,
    details: &dyn OrderDetailFetcher,
    range: &DateRange,
    company_ids: Option<Vec<i64>>,
    mode: ProductMode,
) -> AppResult<Vec<ProductAggregate>> {
    let mut params =
        OrderListParams::new(&range.begin, &range.end).with_page(PRODUCT_SCAN_PAGE_SIZE, 0);
    if let Some(ids) = company_ids {
        params = params.with_company_ids(ids);
    }

    let connection = orders
        .fetch_orders(&params)
        .await
        .map_err(ClientError::into_app_error)?;

    let order_ids: Vec<i64> = connection
        .into_nodes()
        .into_iter()
        .filter_map(|node| node.order_id)
        .take(DETAIL_SAMPLE_LIMIT)
        .collect();

    if order_ids.is_empty() {
        return Ok(Vec::new());
    }

    let fetched = try_join_all(
        order_ids
            .iter()
            .map(|id| details.fetch_order_detail(*id)),
    )
    .await
    .map_err(ClientError::into_app_error)?;

    Ok(merge_line_items(&fetched, mode))
}

/// Merge line items across detail documents, keyed by product name
///
/// Quantities and occurrence counts accumulate; the unit price keeps
/// its maximum; the SKU and the option list keep the first non-empty
/// occurrence; `last_ordered_at` keeps the latest payment date seen.
pub fn merge_line_items(details: &[OrderDetail], mode: ProductMode) -> Vec<ProductAggregate> {
    let mut aggregates: Vec<ProductAggregate> = Vec::new();

    for detail in details {
        for item in &detail.line_items {
            let price = item.pricing.unit_price();
            let pos = match aggregates.iter().position(|a| a.name == item.name) {
                Some(pos) => pos,
                None => {
                    aggregates.push(ProductAggregate {
                        name: item.name.clone(),
                        sku: item.sku.clone(),
                        total_quantity: 0,
                        order_count: 0,
                        best_price: 0.0,
                        options: item.options.clone(),
                        last_ordered_at: None,
                    });
                    aggregates.len() - 1
                }
            };
            let agg = &mut aggregates[pos];

            agg.total_quantity += item.quantity;
            agg.order_count += 1;
            if price > agg.best_price {
                agg.best_price = price;
            }
            if agg.options.is_empty() && !item.options.is_empty() {
                agg.options = item.options.clone();
            }
            if let Some(paid_at) = detail.payment_date {
                if agg.last_ordered_at.is_none_or(|seen| paid_at > seen) {
                    agg.last_ordered_at = Some(paid_at);
                }
            }
        }
    }

    if mode == ProductMode::Display {
        aggregates.sort_by(|a, b| b.total_quantity.cmp(&a.total_quantity));
        aggregates.truncate(TOP_PRODUCTS);
    }
    aggregates
}
