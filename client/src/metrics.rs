//! Pure metric derivation over analytics series. Everything here is
//! stateless and total: empty input yields zero, never a panic.

use crate::payload::AnalyticsPayload;

/// Arithmetic sum of a series; 0 for empty input.
pub fn sum(series: &[f64]) -> f64 {
    series.iter().sum()
}

/// Most recent value of a series; 0 for empty input.
pub fn latest(series: &[f64]) -> f64 {
    series.last().copied().unwrap_or(0.0)
}

/// Percent change from the first to the last point, rounded to a whole
/// percent. Fewer than two points, or a zero baseline, yields 0.
pub fn percent_change(series: &[f64]) -> i64 {
    if series.len() < 2 {
        return 0;
    }
    let first = series[0];
    let last = series[series.len() - 1];
    if first == 0.0 {
        return 0;
    }
    (((last - first) / first) * 100.0).round() as i64
}

/// Stat-card values derived from one analytics document.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_followers: f64,
    pub follower_change_pct: i64,
    pub total_likes: f64,
    pub total_comments: f64,
    pub total_shares: f64,
    pub total_reach: f64,
    pub total_impressions: f64,
    pub total_profile_views: f64,
}

impl DashboardSummary {
    pub fn from_payload(payload: &AnalyticsPayload) -> Self {
        Self {
            total_followers: latest(&payload.followers.data),
            follower_change_pct: percent_change(&payload.followers.data),
            total_likes: sum(&payload.engagement.likes),
            total_comments: sum(&payload.engagement.comments),
            total_shares: sum(&payload.engagement.shares),
            total_reach: sum(&payload.reach.data),
            total_impressions: sum(&payload.impressions.data),
            total_profile_views: sum(&payload.profile_views.data),
        }
    }
}
