// Common test utilities and fixtures

#![allow(dead_code)]

use mockito::{Mock, Server, ServerGuard};
use serde_json::json;
use social_pulse::session::{CredentialStore, CsrfTokenProvider, Navigator};
use social_pulse::transport::ApiClient;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock analytics API server for testing
pub struct MockAnalyticsApi {
    pub server: ServerGuard,
}

impl MockAnalyticsApi {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        Self { server }
    }

    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Full analytics document, as the reporting API serves it.
    pub fn analytics_body() -> serde_json::Value {
        json!({
            "followers": {
                "labels": ["Jan", "Feb", "Mar"],
                "data": [1000, 1200, 1300]
            },
            "engagement": {
                "likes": [100, 150, 200],
                "comments": [30, 40, 50],
                "shares": [10, 15, 20]
            },
            "demographics": {
                "age": [25, 35, 45],
                "count": [300, 400, 200]
            },
            "impressions": {
                "labels": ["Jan", "Feb", "Mar"],
                "data": [5000, 7000, 8500]
            },
            "reach": {
                "labels": ["Jan", "Feb", "Mar"],
                "data": [3000, 4500, 6000]
            },
            "profileViews": {
                "labels": ["Jan", "Feb", "Mar"],
                "data": [120, 180, 210]
            },
            "clickThroughRate": {
                "labels": ["Jan", "Feb", "Mar"],
                "data": [2.5, 3.0, 3.5]
            },
            "topPosts": [
                { "id": 1, "likes": 300, "comments": 50, "shares": 20 },
                { "id": 2, "likes": 250, "comments": 40, "shares": 15 },
                { "id": 3, "likes": 270, "comments": 45, "shares": 18 }
            ],
            "hashtagPerformance": {
                "hashtags": ["#tech", "#coding", "#rustlang"],
                "counts": [1000, 850, 1200]
            },
            "deviceUsage": {
                "devices": ["Mobile", "Desktop", "Tablet"],
                "percentage": [70, 25, 5]
            },
            "locationStats": {
                "locations": ["USA", "India", "UK"],
                "users": [500, 700, 300]
            },
            "genderDistribution": {
                "genders": ["Male", "Female", "Other"],
                "counts": [600, 750, 50]
            }
        })
    }

    pub fn mock_success(&mut self) -> Mock {
        self.server
            .mock("GET", "/analytics")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(Self::analytics_body().to_string())
            .create()
    }

    /// 2xx response whose body declares application-level failure.
    pub fn mock_success_false(&mut self) -> Mock {
        self.server
            .mock("GET", "/analytics")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({"success": false, "message": "Reporting period not ready"}).to_string(),
            )
            .create()
    }

    pub fn mock_status(&mut self, status: usize, body: serde_json::Value) -> Mock {
        self.server
            .mock("GET", "/analytics")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create()
    }

    pub fn mock_invalid_json(&mut self) -> Mock {
        self.server
            .mock("GET", "/analytics")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not valid json {{{")
            .create()
    }
}

/// Credential store double that counts clear() invocations.
pub struct RecordingStore {
    token: Option<String>,
    pub clears: AtomicUsize,
}

impl RecordingStore {
    pub fn with_token(token: &str) -> Arc<Self> {
        Arc::new(Self {
            token: Some(token.to_string()),
            clears: AtomicUsize::new(0),
        })
    }

    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            token: None,
            clears: AtomicUsize::new(0),
        })
    }

    pub fn clear_count(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

impl CredentialStore for RecordingStore {
    fn token(&self) -> Option<String> {
        self.token.clone()
    }

    fn clear(&self) {
        self.clears.fetch_add(1, Ordering::SeqCst);
    }
}

/// Navigator double that records every redirect path.
#[derive(Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.paths
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(path.to_string());
    }
}

pub struct StaticCsrf(pub Option<String>);

impl CsrfTokenProvider for StaticCsrf {
    fn csrf_token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Build a client against a base URL with recording doubles attached.
pub fn test_client(
    base_url: &str,
    store: Arc<RecordingStore>,
    navigator: Arc<RecordingNavigator>,
    csrf: Option<String>,
) -> ApiClient {
    test_client_with_timeout(base_url, Duration::from_secs(10), store, navigator, csrf)
}

pub fn test_client_with_timeout(
    base_url: &str,
    timeout: Duration,
    store: Arc<RecordingStore>,
    navigator: Arc<RecordingNavigator>,
    csrf: Option<String>,
) -> ApiClient {
    ApiClient::new(
        base_url,
        timeout,
        store,
        Arc::new(StaticCsrf(csrf)),
        navigator,
    )
    .expect("client builds")
}
