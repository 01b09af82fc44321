//! Engine Configuration

use crate::range::DateRange;
use portal_client::ClientConfig;
use shared::util::distance_day;

/// Insights engine configuration
///
/// # Environment variables
///
/// Every field can be set through the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | PORTAL_API_URL | http://localhost:3000 | Portal API base URL |
/// | PORTAL_API_TOKEN | (none) | Bearer token for the portal API |
/// | COMPANY_ID | (none) | Restrict analytics to one company |
/// | BEGIN_DATE | today - 90 days | Range start, `YYYY-MM-DD` |
/// | END_DATE | today | Range end, `YYYY-MM-DD` |
/// | EXPORT_DIR | ./exports | Output directory for CSV exports |
/// | LOG_LEVEL | info | Log level filter |
/// | LOG_DIR | (none) | Directory for daily rotating file logs |
/// | LOG_JSON | false | Emit JSON-formatted logs |
///
/// # Example
///
/// ```ignore
/// PORTAL_API_URL=https://portal.example.com COMPANY_ID=42 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Portal API base URL
    pub api_base_url: String,
    /// Bearer token, omitted for anonymous access
    pub api_token: Option<String>,
    /// Company scope filter (B2B accounts only)
    pub company_id: Option<i64>,
    /// Range start override, `YYYY-MM-DD`
    pub begin_date: Option<String>,
    /// Range end override, `YYYY-MM-DD`
    pub end_date: Option<String>,
    /// Output directory for CSV exports
    pub export_dir: String,
    /// Log level filter
    pub log_level: String,
    /// Directory for daily rotating file logs
    pub log_dir: Option<String>,
    /// Emit JSON-formatted logs
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            api_base_url: std::env::var("PORTAL_API_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            api_token: std::env::var("PORTAL_API_TOKEN").ok(),
            company_id: std::env::var("COMPANY_ID")
                .ok()
                .and_then(|v| v.parse().ok()),
            begin_date: std::env::var("BEGIN_DATE").ok(),
            end_date: std::env::var("END_DATE").ok(),
            export_dir: std::env::var("EXPORT_DIR").unwrap_or_else(|_| "./exports".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    /// Override the API URL and export directory
    ///
    /// Intended for tests.
    pub fn with_overrides(
        api_base_url: impl Into<String>,
        export_dir: impl Into<String>,
    ) -> Self {
        let mut config = Self::from_env();
        config.api_base_url = api_base_url.into();
        config.export_dir = export_dir.into();
        config
    }

    /// Date range for the analytics run
    ///
    /// `BEGIN_DATE` / `END_DATE` override either end independently; the
    /// missing end falls back to the trailing 90-day window.
    pub fn date_range(&self) -> DateRange {
        DateRange {
            begin: self
                .begin_date
                .clone()
                .unwrap_or_else(|| distance_day(crate::range::DEFAULT_WINDOW_DAYS)),
            end: self.end_date.clone().unwrap_or_else(|| distance_day(0)),
        }
    }

    /// Client configuration for the portal API
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(&self.api_base_url);
        match &self.api_token {
            Some(token) => config.with_token(token),
            None => config,
        }
    }

    /// Company scope as the list shape the order list endpoint expects
    pub fn company_ids(&self) -> Option<Vec<i64>> {
        self.company_id.map(|id| vec![id])
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_overrides() {
        let config = Config::with_overrides("https://portal.test", "/tmp/exports");
        assert_eq!(config.api_base_url, "https://portal.test");
        assert_eq!(config.export_dir, "/tmp/exports");
    }

    #[test]
    fn test_date_range_defaults_to_trailing_window() {
        let mut config = Config::with_overrides("https://portal.test", "/tmp/exports");
        config.begin_date = None;
        config.end_date = None;
        assert_eq!(config.date_range(), DateRange::default());
    }

    #[test]
    fn test_date_range_honors_explicit_bounds() {
        let mut config = Config::with_overrides("https://portal.test", "/tmp/exports");
        config.begin_date = Some("2025-01-01".into());
        config.end_date = Some("2025-03-31".into());
        let range = config.date_range();
        assert_eq!(range.begin, "2025-01-01");
        assert_eq!(range.end, "2025-03-31");
    }

    #[test]
    fn test_company_ids_wraps_single_id() {
        let mut config = Config::with_overrides("https://portal.test", "/tmp/exports");
        config.company_id = Some(42);
        assert_eq!(config.company_ids(), Some(vec![42]));
        config.company_id = None;
        assert_eq!(config.company_ids(), None);
    }
}
