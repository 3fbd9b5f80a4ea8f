//! Analytics
//!
//! Canned engagement and coupon-usage figures, plus the summaries the dashboard shows.

use serde::Deserialize;

/// Marketing analytics snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Analytics {
    /// Audience figures across platforms
    pub social_engagement: SocialEngagement,

    /// Weekly content figures
    #[serde(default)]
    pub content_performance: Vec<ContentPerformance>,

    /// Redemptions per coupon
    #[serde(default)]
    pub coupon_usage: Vec<CouponUsage>,
}

/// Audience figures.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialEngagement {
    /// Total followers
    pub followers: u64,

    /// Engagement rate, percent
    pub engagement: f64,

    /// Week-on-week follower growth, percent
    pub weekly_growth: f64,

    /// Best performing platform
    pub top_platform: String,
}

/// Content figures for one week.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentPerformance {
    /// Week label as shown on the chart. Not parsed.
    pub date: String,

    /// Posts published
    pub posts: u64,

    /// Likes received
    pub likes: u64,

    /// Comments received
    pub comments: u64,

    /// Shares received
    pub shares: u64,
}

impl ContentPerformance {
    /// Interactions (likes, comments, shares) per post, `None` for a week without posts.
    #[expect(
        clippy::cast_precision_loss,
        reason = "dashboard ratio; counts are far below 2^52"
    )]
    pub fn engagement_per_post(&self) -> Option<f64> {
        if self.posts == 0 {
            return None;
        }

        let interactions = self
            .likes
            .saturating_add(self.comments)
            .saturating_add(self.shares);

        Some(interactions as f64 / self.posts as f64)
    }
}

/// Redemption figures for one coupon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CouponUsage {
    /// Coupon catalog identifier
    pub coupon_id: u32,

    /// Times redeemed
    pub redemptions: u64,

    /// Revenue attributed to the coupon, whole currency units
    pub revenue: u64,
}

/// Summed content figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentTotals {
    /// Posts published
    pub posts: u64,

    /// Likes received
    pub likes: u64,

    /// Comments received
    pub comments: u64,

    /// Shares received
    pub shares: u64,
}

impl Analytics {
    /// Redemptions across all coupons.
    pub fn total_redemptions(&self) -> u64 {
        self.coupon_usage
            .iter()
            .fold(0, |acc, usage| acc.saturating_add(usage.redemptions))
    }

    /// Revenue across all coupons.
    pub fn total_revenue(&self) -> u64 {
        self.coupon_usage
            .iter()
            .fold(0, |acc, usage| acc.saturating_add(usage.revenue))
    }

    /// Usage figures for one coupon.
    pub fn usage_for(&self, coupon_id: u32) -> Option<&CouponUsage> {
        self.coupon_usage
            .iter()
            .find(|usage| usage.coupon_id == coupon_id)
    }

    /// Content figures summed over every week.
    pub fn content_totals(&self) -> ContentTotals {
        self.content_performance
            .iter()
            .fold(ContentTotals::default(), |acc, week| ContentTotals {
                posts: acc.posts.saturating_add(week.posts),
                likes: acc.likes.saturating_add(week.likes),
                comments: acc.comments.saturating_add(week.comments),
                shares: acc.shares.saturating_add(week.shares),
            })
    }
}
