//! Fixtures
//!
//! The restaurant's catalog: business info, post templates, social platforms, coupons and
//! analytics. A copy of the YAML files under `fixtures/` is compiled into the crate; the same
//! files can also be loaded from a directory to override it.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rustc_hash::FxHashSet;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::{
    analytics::Analytics,
    coupons::Coupon,
    fixtures::documents::{
        AnalyticsDocument, CouponsDocument, PlatformsDocument, RestaurantDocument,
        TemplatesDocument,
    },
    platforms::SocialPlatform,
    restaurant::Restaurant,
    templates::Template,
};

pub mod documents;

/// Restaurant file name
pub const RESTAURANT_FILE: &str = "restaurant.yml";

/// Templates file name
pub const TEMPLATES_FILE: &str = "templates.yml";

/// Platforms file name
pub const PLATFORMS_FILE: &str = "platforms.yml";

/// Coupons file name
pub const COUPONS_FILE: &str = "coupons.yml";

/// Analytics file name
pub const ANALYTICS_FILE: &str = "analytics.yml";

const BUNDLED: Sources<'static> = Sources {
    restaurant: include_str!("../../fixtures/restaurant.yml"),
    templates: include_str!("../../fixtures/templates.yml"),
    platforms: include_str!("../../fixtures/platforms.yml"),
    coupons: include_str!("../../fixtures/coupons.yml"),
    analytics: include_str!("../../fixtures/analytics.yml"),
};

/// Fixture Loading Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading a fixture file
    #[error("Failed to read fixture file {}: {source}", path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,

        /// Underlying IO error
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse {file}: {source}")]
    Yaml {
        /// Fixture file name
        file: &'static str,

        /// Underlying parse error
        source: serde_norway::Error,
    },

    /// Two records of the same kind share an id
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId {
        /// Record kind
        kind: &'static str,

        /// Repeated id
        id: u32,
    },

    /// Template not found
    #[error("Template not found: {0}")]
    TemplateNotFound(u32),

    /// Coupon not found
    #[error("Coupon not found: {0}")]
    CouponNotFound(u32),

    /// Platform not found
    #[error("Platform not found: {0}")]
    PlatformNotFound(u32),
}

/// Raw contents of one fixture set.
#[derive(Debug, Clone, Copy)]
struct Sources<'a> {
    restaurant: &'a str,
    templates: &'a str,
    platforms: &'a str,
    coupons: &'a str,
    analytics: &'a str,
}

/// Catalog
#[derive(Debug, Clone)]
pub struct Fixture {
    restaurant: Restaurant,
    templates: Vec<Template>,
    platforms: Vec<SocialPlatform>,
    coupons: Vec<Coupon>,
    analytics: Analytics,
}

impl Fixture {
    /// Load the catalog compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled files fail to parse or validate.
    pub fn bundled() -> Result<Self, FixtureError> {
        Self::from_sources(BUNDLED)
    }

    /// Load a catalog from the five fixture files in `base_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read, parsed, or contains duplicate ids.
    pub fn from_dir(base_path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let base_path = base_path.as_ref();

        debug!(path = %base_path.display(), "loading fixtures from directory");

        let restaurant = read(base_path, RESTAURANT_FILE)?;
        let templates = read(base_path, TEMPLATES_FILE)?;
        let platforms = read(base_path, PLATFORMS_FILE)?;
        let coupons = read(base_path, COUPONS_FILE)?;
        let analytics = read(base_path, ANALYTICS_FILE)?;

        Self::from_sources(Sources {
            restaurant: &restaurant,
            templates: &templates,
            platforms: &platforms,
            coupons: &coupons,
            analytics: &analytics,
        })
    }

    fn from_sources(sources: Sources<'_>) -> Result<Self, FixtureError> {
        let RestaurantDocument { restaurant } = parse(RESTAURANT_FILE, sources.restaurant)?;
        let TemplatesDocument { templates } = parse(TEMPLATES_FILE, sources.templates)?;
        let PlatformsDocument { platforms } = parse(PLATFORMS_FILE, sources.platforms)?;
        let CouponsDocument { coupons } = parse(COUPONS_FILE, sources.coupons)?;
        let AnalyticsDocument { analytics } = parse(ANALYTICS_FILE, sources.analytics)?;

        ensure_unique_ids("template", templates.iter().map(|t| t.id))?;
        ensure_unique_ids("platform", platforms.iter().map(|p| p.id))?;
        ensure_unique_ids("coupon", coupons.iter().map(|c| c.id))?;

        debug!(
            templates = templates.len(),
            platforms = platforms.len(),
            coupons = coupons.len(),
            "fixtures loaded"
        );

        Ok(Self {
            restaurant,
            templates,
            platforms,
            coupons,
            analytics,
        })
    }

    /// Business information
    pub fn restaurant(&self) -> &Restaurant {
        &self.restaurant
    }

    /// All templates, in catalog order
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// All platforms, in catalog order
    pub fn platforms(&self) -> &[SocialPlatform] {
        &self.platforms
    }

    /// All coupons, in catalog order
    pub fn coupons(&self) -> &[Coupon] {
        &self.coupons
    }

    /// Analytics snapshot
    pub fn analytics(&self) -> &Analytics {
        &self.analytics
    }

    /// Get a template by id
    ///
    /// # Errors
    ///
    /// Returns an error if the template is not found.
    pub fn template(&self, id: u32) -> Result<&Template, FixtureError> {
        self.templates
            .iter()
            .find(|template| template.id == id)
            .ok_or(FixtureError::TemplateNotFound(id))
    }

    /// Get a coupon by id
    ///
    /// # Errors
    ///
    /// Returns an error if the coupon is not found.
    pub fn coupon(&self, id: u32) -> Result<&Coupon, FixtureError> {
        self.coupons
            .iter()
            .find(|coupon| coupon.id == id)
            .ok_or(FixtureError::CouponNotFound(id))
    }

    /// Get a platform by id
    ///
    /// # Errors
    ///
    /// Returns an error if the platform is not found.
    pub fn platform(&self, id: u32) -> Result<&SocialPlatform, FixtureError> {
        self.platforms
            .iter()
            .find(|platform| platform.id == id)
            .ok_or(FixtureError::PlatformNotFound(id))
    }

    /// Get a platform by id for connection changes
    ///
    /// # Errors
    ///
    /// Returns an error if the platform is not found.
    pub fn platform_mut(&mut self, id: u32) -> Result<&mut SocialPlatform, FixtureError> {
        self.platforms
            .iter_mut()
            .find(|platform| platform.id == id)
            .ok_or(FixtureError::PlatformNotFound(id))
    }
}

fn read(base_path: &Path, file: &str) -> Result<String, FixtureError> {
    let path = base_path.join(file);

    fs::read_to_string(&path).map_err(|source| FixtureError::Io { path, source })
}

fn parse<T: DeserializeOwned>(file: &'static str, contents: &str) -> Result<T, FixtureError> {
    serde_norway::from_str(contents).map_err(|source| FixtureError::Yaml { file, source })
}

fn ensure_unique_ids(
    kind: &'static str,
    ids: impl Iterator<Item = u32>,
) -> Result<(), FixtureError> {
    let mut seen = FxHashSet::default();

    for id in ids {
        if !seen.insert(id) {
            return Err(FixtureError::DuplicateId { kind, id });
        }
    }

    Ok(())
}
