use serde::{Deserialize, Serialize};

/// Full analytics document for one reporting period, as served by
/// `GET {base}/analytics`.
///
/// Every field defaults to its empty shape, so a document missing any key
/// still deserializes and downstream consumers only ever see empty
/// sequences, never nulls.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyticsPayload {
    pub followers: TimeSeries,
    pub engagement: EngagementSeries,
    pub demographics: Demographics,
    pub impressions: TimeSeries,
    pub reach: TimeSeries,
    pub profile_views: TimeSeries,
    pub click_through_rate: TimeSeries,
    pub top_posts: Vec<TopPost>,
    pub hashtag_performance: HashtagPerformance,
    pub device_usage: DeviceUsage,
    pub location_stats: LocationStats,
    pub gender_distribution: GenderDistribution,
}

/// A metric over time: parallel label/value arrays of equal length.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeSeries {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

impl TimeSeries {
    pub fn new(labels: &[&str], data: &[f64]) -> Self {
        Self {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            data: data.to_vec(),
        }
    }

    /// Labels and values must stay in lockstep; charts index one by the other.
    pub fn is_aligned(&self) -> bool {
        self.labels.len() == self.data.len()
    }
}

/// Per-interaction engagement counts, one entry per period in the
/// corresponding `followers` labels.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EngagementSeries {
    pub likes: Vec<f64>,
    pub comments: Vec<f64>,
    pub shares: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Demographics {
    pub age: Vec<f64>,
    pub count: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TopPost {
    pub id: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HashtagPerformance {
    pub hashtags: Vec<String>,
    pub counts: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DeviceUsage {
    pub devices: Vec<String>,
    pub percentage: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocationStats {
    pub locations: Vec<String>,
    pub users: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GenderDistribution {
    pub genders: Vec<String>,
    pub counts: Vec<f64>,
}

impl AnalyticsPayload {
    /// Bundled sample document shown when the live fetch fails, so the
    /// dashboard renders something instead of going blank.
    pub fn sample() -> Self {
        Self {
            followers: TimeSeries::new(
                &["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
                &[1000.0, 1200.0, 1300.0, 1400.0, 1500.0, 1700.0],
            ),
            engagement: EngagementSeries {
                likes: vec![120.0, 190.0, 130.0, 170.0, 150.0, 200.0],
                comments: vec![30.0, 40.0, 35.0, 45.0, 40.0, 50.0],
                shares: vec![10.0, 15.0, 12.0, 18.0, 15.0, 20.0],
            },
            demographics: Demographics {
                age: vec![25.0, 30.0, 35.0, 40.0, 45.0],
                count: vec![300.0, 500.0, 400.0, 200.0, 100.0],
            },
            ..Self::default()
        }
    }
}
