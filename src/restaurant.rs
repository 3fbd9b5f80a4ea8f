//! Restaurant

use serde::Deserialize;

/// Business information shown on the profile page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Restaurant {
    /// Business name
    pub name: String,

    /// Short description
    #[serde(default)]
    pub description: String,

    /// Street address
    #[serde(default)]
    pub address: String,

    /// Contact phone number
    #[serde(default)]
    pub phone: String,

    /// Opening hours, free text
    #[serde(default)]
    pub business_hours: String,

    /// Logo image URL
    #[serde(default)]
    pub logo: String,

    /// Cover image URL
    #[serde(default)]
    pub cover_image: String,

    /// Cuisine and style tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Average review rating
    #[serde(default)]
    pub rating: f32,

    /// Number of reviews behind `rating`
    #[serde(default)]
    pub review_count: u32,
}
