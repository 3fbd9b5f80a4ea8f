//! Banquet prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    analytics::{Analytics, ContentPerformance, ContentTotals, CouponUsage, SocialEngagement},
    coupons::{
        CalendarDate, Coupon, CouponStatus, InvalidDateError, ValidityWindow, error::DateField,
        is_valid, redeemable,
    },
    dates::{DateError, add_days, format_date, format_readable_date, parse_date},
    fixtures::{Fixture, FixtureError},
    platforms::{PlatformError, SocialPlatform},
    restaurant::Restaurant,
    templates::{SubstitutionMap, Template, Values, placeholders, render},
    text::{DEFAULT_TRUNCATE_LENGTH, truncate_text},
};
