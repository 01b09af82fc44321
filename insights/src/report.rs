//! Report Pipeline
//!
//! Fetches one page of orders for the date range and runs every
//! aggregator over it. Two entry points: [`try_build_report`] surfaces
//! the first error to the caller, [`build_report`] fails closed and
//! always returns a report so a fetch outage renders as empty charts
//! instead of stale or partial figures.

use crate::aggregate::{
    ProductMode, aggregate_employees, aggregate_monthly, aggregate_products, aggregate_status,
    summarize_spend,
};
use crate::range::DateRange;
use portal_client::{ClientError, OrderDetailFetcher, OrderFetcher};
use shared::error::AppResult;
use shared::models::{
    EmployeeBucket, MonthlySeries, OrderListParams, OrderNode, ProductAggregate, SpendSummary,
    StatusBucket, StatusLookup,
};

/// Page size of the main order fetch
pub const ORDER_PAGE_SIZE: i64 = 30;

/// Knobs for one report run
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub page_size: i64,
    /// Company scope filter (B2B accounts only)
    pub company_ids: Option<Vec<i64>>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            page_size: ORDER_PAGE_SIZE,
            company_ids: None,
        }
    }
}

/// Everything the insights view renders, derived from one fetch
#[derive(Debug, Clone)]
pub struct InsightsReport {
    pub range: DateRange,
    /// The fetched page of orders, newest first
    pub orders: Vec<OrderNode>,
    pub summary: SpendSummary,
    pub monthly: MonthlySeries,
    pub statuses: Vec<StatusBucket>,
    pub employees: Vec<EmployeeBucket>,
    pub popular_products: Vec<ProductAggregate>,
}

impl InsightsReport {
    /// The designated empty report for a range
    pub fn empty(range: DateRange) -> Self {
        Self {
            range,
            orders: Vec::new(),
            summary: SpendSummary::default(),
            monthly: MonthlySeries::default(),
            statuses: Vec::new(),
            employees: Vec::new(),
            popular_products: Vec::new(),
        }
    }
}

/// Build a report, surfacing the first fetch error
pub async fn try_build_report(
    orders: &dyn OrderFetcher,
    details: &dyn OrderDetailFetcher,
    lookup: &dyn StatusLookup,
    range: &DateRange,
    options: &ReportOptions,
) -> AppResult<InsightsReport> {
    let nodes = fetch_page(orders, range, options).await?;
    let popular_products = aggregate_products(
        orders,
        details,
        range,
        options.company_ids.clone(),
        ProductMode::Display,
    )
    .await?;

    Ok(assemble(range.clone(), nodes, popular_products, lookup))
}

/// Build a report, failing closed
///
/// A failed order fetch empties the whole report; a failed product
/// sample empties only the product list. Errors are logged, never
/// propagated.
pub async fn build_report(
    orders: &dyn OrderFetcher,
    details: &dyn OrderDetailFetcher,
    lookup: &dyn StatusLookup,
    range: &DateRange,
    options: &ReportOptions,
) -> InsightsReport {
    let nodes = match fetch_page(orders, range, options).await {
        Ok(fetched) => fetched,
        Err(err) => {
            tracing::error!(code = %err.code, "order fetch failed: {}", err);
            return InsightsReport::empty(range.clone());
        }
    };

    let popular_products = match aggregate_products(
        orders,
        details,
        range,
        options.company_ids.clone(),
        ProductMode::Display,
    )
    .await
    {
        Ok(products) => products,
        Err(err) => {
            tracing::error!(code = %err.code, "product aggregation failed: {}", err);
            Vec::new()
        }
    };

    assemble(range.clone(), nodes, popular_products, lookup)
}

async fn fetch_page(
    orders: &dyn OrderFetcher,
    range: &DateRange,
    options: &ReportOptions,
) -> AppResult<FetchedPage> {
    let mut params =
        OrderListParams::new(&range.begin, &range.end).with_page(options.page_size, 0);
    if let Some(ids) = &options.company_ids {
        params = params.with_company_ids(ids.clone());
    }

    let connection = orders
        .fetch_orders(&params)
        .await
        .map_err(ClientError::into_app_error)?;

    Ok(FetchedPage {
        total_count: connection.total_count,
        nodes: connection.into_nodes(),
    })
}

struct FetchedPage {
    total_count: i64,
    nodes: Vec<OrderNode>,
}

fn assemble(
    range: DateRange,
    page: FetchedPage,
    popular_products: Vec<ProductAggregate>,
    lookup: &dyn StatusLookup,
) -> InsightsReport {
    let summary = summarize_spend(&page.nodes, page.total_count);
    let monthly = aggregate_monthly(&page.nodes);
    let statuses = aggregate_status(&page.nodes, lookup);
    let employees = aggregate_employees(&page.nodes);

    InsightsReport {
        range,
        orders: page.nodes,
        summary,
        monthly,
        statuses,
        employees,
        popular_products,
    }
}
