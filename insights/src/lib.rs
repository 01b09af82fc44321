//! Buyer-portal order analytics engine
//!
//! Fetches recent orders from the portal API, aggregates them into the
//! shapes the insights view renders (monthly spend, status
//! distribution, employee leaderboard, popular products) and encodes
//! the two CSV export downloads.
//!
//! Module map:
//! - [`aggregate`] - the aggregation pipeline
//! - [`export`] - CSV encodings and file writers
//! - [`report`] - the one-shot report pipeline
//! - [`config`] / [`logger`] / [`range`] - runtime plumbing

pub mod aggregate;
pub mod config;
pub mod export;
pub mod logger;
pub mod range;
pub mod report;

pub use config::Config;
pub use range::DateRange;
pub use report::{InsightsReport, ORDER_PAGE_SIZE, ReportOptions, build_report, try_build_report};
