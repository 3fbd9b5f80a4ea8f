//! Fixture Documents
//!
//! Top-level shapes of the YAML fixture files.

use serde::Deserialize;

use crate::{
    analytics::Analytics, coupons::Coupon, platforms::SocialPlatform, restaurant::Restaurant,
    templates::Template,
};

/// `restaurant.yml`
#[derive(Debug, Deserialize)]
pub struct RestaurantDocument {
    /// Business information
    pub restaurant: Restaurant,
}

/// `templates.yml`
#[derive(Debug, Deserialize)]
pub struct TemplatesDocument {
    /// Post templates, in display order
    #[serde(default)]
    pub templates: Vec<Template>,
}

/// `platforms.yml`
#[derive(Debug, Deserialize)]
pub struct PlatformsDocument {
    /// Social platforms, in display order
    #[serde(default)]
    pub platforms: Vec<SocialPlatform>,
}

/// `coupons.yml`
#[derive(Debug, Deserialize)]
pub struct CouponsDocument {
    /// Coupons, in display order
    #[serde(default)]
    pub coupons: Vec<Coupon>,
}

/// `analytics.yml`
#[derive(Debug, Deserialize)]
pub struct AnalyticsDocument {
    /// Analytics snapshot
    pub analytics: Analytics,
}
