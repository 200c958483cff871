//! Dashboard refresh loop: fetch, summarize, log, sleep, repeat until
//! cancelled. This is the whole presentation layer of the headless client;
//! rendering is structured log output.

use crate::config::AppConfig;
use crate::fetcher::{AnalyticsFetcher, FetchState};
use crate::metrics::DashboardSummary;
use std::sync::Arc;
use tokio::time::{Duration, sleep};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

pub async fn run_dashboard(
    fetcher: Arc<AnalyticsFetcher>,
    config: AppConfig,
    cancel_token: CancellationToken,
) {
    info!(
        title = %config.dashboard_title,
        base_url = %config.base_url,
        refresh_secs = config.refresh_secs,
        "Dashboard started"
    );

    loop {
        tokio::select! {
            _ = cancel_token.cancelled() => {
                info!("Shutdown signal received, stopping dashboard loop");
                break;
            }
            _ = async {
                info!("Refreshing analytics...");
                let state = fetcher.load_analytics().await;
                render(&state);
                sleep(Duration::from_secs(config.refresh_secs)).await;
            } => {}
        }
    }
}

/// Log one settled fetch state as stat cards.
pub fn render(state: &FetchState) {
    if let Some(err) = &state.error {
        warn!(
            status = err.status_code,
            network = err.is_network_error,
            "{} - Showing sample data",
            err.message
        );
    }

    let summary = DashboardSummary::from_payload(&state.data);
    info!(
        total_followers = summary.total_followers,
        follower_change_pct = summary.follower_change_pct,
        total_likes = summary.total_likes,
        total_comments = summary.total_comments,
        total_shares = summary.total_shares,
        total_reach = summary.total_reach,
        total_impressions = summary.total_impressions,
        total_profile_views = summary.total_profile_views,
        using_fallback = state.using_fallback,
        "Analytics refreshed"
    );
}
