//! Analytics date range

use serde::{Deserialize, Serialize};
use shared::util::distance_day;

/// Length of the default trailing analytics window, in days
pub const DEFAULT_WINDOW_DAYS: i64 = 90;

/// Inclusive `YYYY-MM-DD` date range sent to the order list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub begin: String,
    pub end: String,
}

impl DateRange {
    pub fn new(begin: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            begin: begin.into(),
            end: end.into(),
        }
    }

    /// Range covering the trailing `days` days up to today (UTC)
    pub fn trailing_days(days: i64) -> Self {
        Self {
            begin: distance_day(days),
            end: distance_day(0),
        }
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::trailing_days(DEFAULT_WINDOW_DAYS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_trailing_ninety_days() {
        let before = distance_day(0);
        let range = DateRange::default();
        let expected_begin = distance_day(90);
        let after = distance_day(0);
        if before != after {
            // crossed UTC midnight mid-test
            return;
        }
        assert_eq!(range.end, before);
        assert_eq!(range.begin, expected_begin);
        assert!(range.begin < range.end);
    }

    #[test]
    fn test_explicit_range() {
        let range = DateRange::new("2025-01-01", "2025-03-31");
        assert_eq!(range.begin, "2025-01-01");
        assert_eq!(range.end, "2025-03-31");
    }
}
