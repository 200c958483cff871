use crate::fetcher::FallbackPolicy;

/// Deployment configuration for the dashboard client.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the analytics API, without a trailing slash.
    pub base_url: String,
    pub dashboard_title: String,
    /// View path used as the return target on login redirects.
    pub view_path: String,
    pub timeout_secs: u64,
    pub refresh_secs: u64,
    pub fallback_policy: FallbackPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            dashboard_title: "Social Media Dashboard".to_string(),
            view_path: "/dashboard".to_string(),
            timeout_secs: 10,
            refresh_secs: 60,
            fallback_policy: FallbackPolicy::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("PULSE_API_BASE_URL")
            && !val.is_empty()
        {
            config.base_url = val;
        }
        if let Ok(val) = std::env::var("PULSE_DASHBOARD_TITLE")
            && !val.is_empty()
        {
            config.dashboard_title = val;
        }
        if let Ok(val) = std::env::var("PULSE_VIEW_PATH")
            && !val.is_empty()
        {
            config.view_path = val;
        }
        if let Ok(val) = std::env::var("PULSE_TIMEOUT_SECS")
            && let Ok(parsed) = val.parse()
        {
            config.timeout_secs = parsed;
        }
        if let Ok(val) = std::env::var("PULSE_REFRESH_SECS")
            && let Ok(parsed) = val.parse()
        {
            config.refresh_secs = parsed;
        }
        if let Ok(val) = std::env::var("PULSE_FALLBACK")
            && let Ok(parsed) = val.parse()
        {
            config.fallback_policy = parsed;
        }

        config
    }
}
