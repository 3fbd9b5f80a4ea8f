//! Coupon Errors

use std::fmt;

use thiserror::Error;

/// Which end of a coupon's validity window a date belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    /// First redeemable day
    ValidFrom,

    /// Last redeemable day
    ValidTo,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateField::ValidFrom => f.write_str("valid_from"),
            DateField::ValidTo => f.write_str("valid_to"),
        }
    }
}

/// A coupon date could not be parsed into a calendar date.
#[derive(Debug, Error)]
#[error("coupon {field} is not a valid calendar date: {value:?}")]
pub struct InvalidDateError {
    /// Field holding the bad value
    pub field: DateField,

    /// The value as written in the catalog
    pub value: String,

    /// Underlying parse failure
    #[source]
    pub source: jiff::Error,
}
