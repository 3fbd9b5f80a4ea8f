//! Banquet
//!
//! Banquet is the marketing companion core for a single restaurant: it fills in social-media
//! post templates, decides which coupons are redeemable on a given day, and serves the bundled
//! restaurant catalog.

pub mod analytics;
pub mod coupons;
pub mod dates;
pub mod fixtures;
pub mod platforms;
pub mod prelude;
pub mod restaurant;
pub mod templates;
pub mod text;
