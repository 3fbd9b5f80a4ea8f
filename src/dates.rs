//! Date Helpers
//!
//! Calendar-date formatting and arithmetic for display. All dates are civil dates with no time
//! zone attached.

use jiff::{Span, civil::Date};
use thiserror::Error;

/// Errors from date parsing and arithmetic.
#[derive(Debug, Error)]
pub enum DateError {
    /// Value is not a `YYYY-MM-DD` calendar date.
    #[error("not a calendar date: {value:?}")]
    Parse {
        /// The rejected input
        value: String,

        /// Underlying parse failure
        source: jiff::Error,
    },

    /// Arithmetic left the supported date range.
    #[error("date out of range: {0}")]
    OutOfRange(#[source] jiff::Error),
}

/// Parse a calendar date.
///
/// # Errors
///
/// Returns [`DateError::Parse`] if `value` is not a valid date.
pub fn parse_date(value: &str) -> Result<Date, DateError> {
    value.parse().map_err(|source| DateError::Parse {
        value: value.to_string(),
        source,
    })
}

/// Format as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    date.to_string()
}

/// Format as `MMM D, YYYY`, e.g. `Aug 1, 2024`.
pub fn format_readable_date(date: Date) -> String {
    date.strftime("%b %-d, %Y").to_string()
}

/// Move `date` by `days` calendar days (negative goes backwards).
///
/// # Errors
///
/// Returns [`DateError::OutOfRange`] if the result falls outside the supported range.
pub fn add_days(date: Date, days: i64) -> Result<Date, DateError> {
    let span = Span::new().try_days(days).map_err(DateError::OutOfRange)?;

    date.checked_add(span).map_err(DateError::OutOfRange)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates() -> TestResult {
        assert_eq!(parse_date("2024-08-01")?, date(2024, 8, 1));

        Ok(())
    }

    #[test]
    fn parse_date_rejects_garbage_and_impossible_days() {
        assert!(matches!(
            parse_date("not-a-date"),
            Err(DateError::Parse { .. })
        ));
        assert!(matches!(
            parse_date("2025-02-29"),
            Err(DateError::Parse { .. })
        ));
    }

    #[test]
    fn format_date_is_iso() {
        assert_eq!(format_date(date(2024, 8, 1)), "2024-08-01");
    }

    #[test]
    fn readable_date_drops_day_padding() {
        assert_eq!(format_readable_date(date(2024, 8, 1)), "Aug 1, 2024");
        assert_eq!(format_readable_date(date(2024, 12, 31)), "Dec 31, 2024");
    }

    #[test]
    fn add_days_crosses_month_and_year_boundaries() -> TestResult {
        assert_eq!(add_days(date(2024, 8, 31), 1)?, date(2024, 9, 1));
        assert_eq!(add_days(date(2024, 12, 31), 1)?, date(2025, 1, 1));
        assert_eq!(add_days(date(2024, 3, 1), -1)?, date(2024, 2, 29));

        Ok(())
    }

    #[test]
    fn add_days_reports_overflow() {
        assert!(matches!(
            add_days(date(9999, 12, 31), 1),
            Err(DateError::OutOfRange(_))
        ));
        assert!(matches!(
            add_days(date(2024, 1, 1), i64::MAX),
            Err(DateError::OutOfRange(_))
        ));
    }
}
