//! Small date and currency helpers shared across crates

use chrono::{DateTime, Utc};

/// Parse an epoch-seconds timestamp into a UTC datetime
///
/// Returns `None` for timestamps chrono cannot represent.
pub fn datetime_from_epoch(epoch_seconds: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(epoch_seconds, 0)
}

/// Format an epoch-seconds timestamp as a UTC `YYYY-MM-DD` string
pub fn utc_date_string(epoch_seconds: i64) -> Option<String> {
    datetime_from_epoch(epoch_seconds).map(|dt| dt.format("%Y-%m-%d").to_string())
}

/// Grouping key for the calendar month of a UTC datetime (`YYYY-MM`)
pub fn month_key(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m").to_string()
}

/// Display label for the calendar month of a UTC datetime (`Jan 2025`)
pub fn month_label(dt: &DateTime<Utc>) -> String {
    dt.format("%b %Y").to_string()
}

/// `YYYY-MM-DD` string for the date `days` days before today (UTC)
///
/// `distance_day(90)` / `distance_day(0)` form the default trailing
/// 90-day analytics window.
pub fn distance_day(days: i64) -> String {
    (Utc::now() - chrono::Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

/// Format a monetary value as `$1,234.56`
///
/// Rounds to two decimal places and inserts thousands separators.
/// Negative values keep the sign ahead of the currency symbol.
pub fn currency_format(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as i64;
    let units = cents / 100;
    let fraction = cents % 100;

    let digits = units.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${}.{:02}", grouped, fraction)
    } else {
        format!("${}.{:02}", grouped, fraction)
    }
}
