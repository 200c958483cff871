use social_pulse::config::AppConfig;
use social_pulse::dashboard::run_dashboard;
use social_pulse::fetcher::AnalyticsFetcher;
use social_pulse::session::{EnvCredentialStore, EnvCsrfProvider, LogNavigator};
use social_pulse::transport::ApiClient;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();

    let store = Arc::new(EnvCredentialStore::from_env("PULSE_AUTH_TOKEN"));
    let csrf = Arc::new(EnvCsrfProvider::from_env("PULSE_CSRF_TOKEN"));
    let navigator = Arc::new(LogNavigator);

    let client = match ApiClient::new(
        &config.base_url,
        Duration::from_secs(config.timeout_secs),
        store,
        csrf,
        navigator,
    ) {
        Ok(client) => client.with_view_path(&config.view_path),
        Err(e) => {
            error!(error = %e, "Failed to construct API client");
            std::process::exit(1);
        }
    };

    let fetcher = Arc::new(AnalyticsFetcher::new(client, config.fallback_policy));

    let cancel_token = CancellationToken::new();
    let loop_handle = tokio::spawn(run_dashboard(
        Arc::clone(&fetcher),
        config,
        cancel_token.clone(),
    ));

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }

    info!("Exit requested, initiating graceful shutdown");
    cancel_token.cancel();
    let _ = loop_handle.await;
}
