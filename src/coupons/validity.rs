//! Coupon Validity
//!
//! Validity windows are inclusive calendar-date ranges. "Today" is always supplied by the
//! caller; nothing here reads the clock.

use jiff::{
    Timestamp, Zoned,
    civil::{Date, DateTime},
    tz::TimeZone,
};

use crate::coupons::{
    Coupon, CouponStatus,
    error::{DateField, InvalidDateError},
};

/// Anything that can be reduced to a calendar date.
///
/// Zoned datetimes are reduced in their own time zone, so a timestamp late in the evening
/// local time still counts as that local day.
pub trait CalendarDate {
    /// The calendar date with any time of day discarded.
    fn into_date(self) -> Date;
}

impl CalendarDate for Date {
    fn into_date(self) -> Date {
        self
    }
}

impl CalendarDate for DateTime {
    fn into_date(self) -> Date {
        self.date()
    }
}

impl CalendarDate for Zoned {
    fn into_date(self) -> Date {
        self.date()
    }
}

impl CalendarDate for &Zoned {
    fn into_date(self) -> Date {
        self.date()
    }
}

/// Inclusive range of redeemable days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidityWindow {
    /// First redeemable day
    pub from: Date,

    /// Last redeemable day
    pub to: Date,
}

impl ValidityWindow {
    /// Create a window. `from <= to` is not checked; an inverted window contains no dates.
    pub fn new(from: Date, to: Date) -> Self {
        Self { from, to }
    }

    /// Whether `date` falls inside the window, both ends included.
    pub fn contains(&self, date: impl CalendarDate) -> bool {
        let date = date.into_date();

        self.from <= date && date <= self.to
    }

    /// Where `date` falls relative to the window.
    ///
    /// For an inverted window a day that is both before the start and after the end reports
    /// [`CouponStatus::Upcoming`].
    pub fn status(&self, date: impl CalendarDate) -> CouponStatus {
        let date = date.into_date();

        if date < self.from {
            CouponStatus::Upcoming
        } else if date > self.to {
            CouponStatus::Expired
        } else {
            CouponStatus::Active
        }
    }
}

/// Whether `coupon` is redeemable on `today`.
///
/// Returns `true` iff `valid_from <= today <= valid_to`. The `published` flag is not
/// consulted; see [`redeemable`](crate::coupons::redeemable) for that.
///
/// ```
/// use banquet::coupons::{Coupon, is_valid};
/// use jiff::civil::date;
///
/// let coupon = Coupon::new(1, "10% Off", "2024-08-01", "2024-08-31");
///
/// assert!(is_valid(&coupon, date(2024, 8, 31))?);
/// assert!(!is_valid(&coupon, date(2024, 9, 1))?);
/// # Ok::<(), banquet::coupons::InvalidDateError>(())
/// ```
///
/// # Errors
///
/// Returns [`InvalidDateError`] if `valid_from` or `valid_to` is not a calendar date.
/// `valid_from` is checked first.
pub fn is_valid(coupon: &Coupon, today: impl CalendarDate) -> Result<bool, InvalidDateError> {
    Ok(coupon.validity()?.contains(today))
}

/// Parse one end of a validity window.
///
/// Accepts a calendar date or a datetime. A datetime with a numeric offset keeps its local
/// date; a `Z` instant is reduced to its UTC date. The error carries the calendar date
/// parse failure.
pub(crate) fn parse_field(field: DateField, value: &str) -> Result<Date, InvalidDateError> {
    match value.parse::<Date>() {
        Ok(date) => Ok(date),
        Err(source) => value
            .parse::<Timestamp>()
            .ok()
            .map(|instant| instant.to_zoned(TimeZone::UTC).date())
            .ok_or_else(|| InvalidDateError {
                field,
                value: value.to_string(),
                source,
            }),
    }
}
