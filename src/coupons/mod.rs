//! Coupons
//!
//! Time-bounded promotional offers and the evaluator that decides whether one can be redeemed
//! on a given day.

use std::fmt;

use serde::Deserialize;

use crate::coupons::error::DateField;

pub mod error;
pub mod validity;

pub use error::InvalidDateError;
pub use validity::{CalendarDate, ValidityWindow, is_valid};

/// A promotional offer as listed in the catalog.
///
/// The validity dates are kept exactly as written and only parsed when evaluated, so a
/// malformed date surfaces as an [`InvalidDateError`] at the point of use.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Coupon {
    /// Catalog identifier
    pub id: u32,

    /// Display title
    pub title: String,

    /// Longer description of the offer
    #[serde(default)]
    pub description: String,

    /// Platform the coupon is listed on
    #[serde(default)]
    pub platform: String,

    /// First redeemable day, `YYYY-MM-DD`
    pub valid_from: String,

    /// Last redeemable day, `YYYY-MM-DD`
    pub valid_to: String,

    /// Redemption code
    #[serde(default)]
    pub code: String,

    /// Human-readable discount, e.g. `10%` or `BOGO`
    #[serde(default)]
    pub discount: String,

    /// Whether the coupon has been published to its platform
    #[serde(default)]
    pub published: bool,
}

impl Coupon {
    /// Create an unpublished coupon with just a title and validity window.
    pub fn new(
        id: u32,
        title: impl Into<String>,
        valid_from: impl Into<String>,
        valid_to: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            platform: String::new(),
            valid_from: valid_from.into(),
            valid_to: valid_to.into(),
            code: String::new(),
            discount: String::new(),
            published: false,
        }
    }

    /// Parse the validity window.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDateError`] for the first of `valid_from`, `valid_to` that is not a
    /// calendar date.
    pub fn validity(&self) -> Result<ValidityWindow, InvalidDateError> {
        let from = validity::parse_field(DateField::ValidFrom, &self.valid_from)?;
        let to = validity::parse_field(DateField::ValidTo, &self.valid_to)?;

        Ok(ValidityWindow::new(from, to))
    }

    /// Whether the coupon is redeemable on `today`. See [`is_valid`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDateError`] if either validity date is malformed.
    pub fn is_valid_on(&self, today: impl CalendarDate) -> Result<bool, InvalidDateError> {
        is_valid(self, today)
    }

    /// Where `today` falls relative to the validity window. See [`ValidityWindow::status`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDateError`] if either validity date is malformed.
    pub fn status(&self, today: impl CalendarDate) -> Result<CouponStatus, InvalidDateError> {
        Ok(self.validity()?.status(today))
    }
}

/// Position of a day relative to a coupon's validity window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CouponStatus {
    /// The window has not opened yet
    Upcoming,

    /// Redeemable
    Active,

    /// The window has closed
    Expired,
}

impl fmt::Display for CouponStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CouponStatus::Upcoming => f.write_str("upcoming"),
            CouponStatus::Active => f.write_str("active"),
            CouponStatus::Expired => f.write_str("expired"),
        }
    }
}

/// Published coupons that are redeemable on `today`, in catalog order.
///
/// # Errors
///
/// Returns the first [`InvalidDateError`] met while walking `coupons`. Unpublished coupons are
/// skipped without parsing their dates.
pub fn redeemable(
    coupons: &[Coupon],
    today: impl CalendarDate,
) -> Result<Vec<&Coupon>, InvalidDateError> {
    let today = today.into_date();
    let mut found = Vec::new();

    for coupon in coupons.iter().filter(|coupon| coupon.published) {
        if coupon.is_valid_on(today)? {
            found.push(coupon);
        }
    }

    Ok(found)
}
