use insights::aggregate::{ProductMode, aggregate_products};
use insights::{Config, ReportOptions, build_report, export, logger};
use shared::models::PortalStatusLookup;
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    logger::init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;

    tracing::info!("Portal insights starting...");

    // 2. Portal API client
    let client = config.client_config().build_http_client()?;

    // 3. Build the report
    let range = config.date_range();
    let options = ReportOptions {
        company_ids: config.company_ids(),
        ..ReportOptions::default()
    };
    let report = build_report(&client, &client, &PortalStatusLookup, &range, &options).await;

    tracing::info!(
        begin = %report.range.begin,
        end = %report.range.end,
        orders = report.summary.order_count,
        total_spend = report.summary.total_spend,
        months = report.monthly.buckets.len(),
        statuses = report.statuses.len(),
        employees = report.employees.len(),
        products = report.popular_products.len(),
        "report built"
    );

    // 4. Write both CSV exports
    let export_dir = Path::new(&config.export_dir);
    std::fs::create_dir_all(export_dir)?;

    let orders_path = export::export_orders(export_dir, &report.orders)?;

    // The purchased-items download covers every sampled product, not
    // just the displayed top ten.
    let all_products = aggregate_products(
        &client,
        &client,
        &range,
        config.company_ids(),
        ProductMode::Export,
    )
    .await
    .unwrap_or_else(|err| {
        tracing::error!(code = %err.code, "product export failed: {}", err);
        Vec::new()
    });
    let items_path = export::export_purchased_items(export_dir, &all_products)?;

    tracing::info!(
        orders = %orders_path.display(),
        items = %items_path.display(),
        "exports written"
    );

    Ok(())
}
