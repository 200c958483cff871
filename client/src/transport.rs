//! Transport client for the analytics API. Wraps outbound HTTP, attaches
//! auth/CSRF headers, unwraps successful payloads, and classifies every
//! failure into an [`ApiError`] before it reaches application code.

use crate::error::ApiError;
use crate::payload::AnalyticsPayload;
use crate::session::{self, CredentialStore, CsrfTokenProvider, Navigator};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use wreq::ClientBuilder;
use wreq::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

pub const ANALYTICS_PATH: &str = "/analytics";

pub struct ApiClient {
    http: wreq::Client,
    base_url: String,
    store: Arc<dyn CredentialStore>,
    csrf: Arc<dyn CsrfTokenProvider>,
    navigator: Arc<dyn Navigator>,
    /// The view path carried as the return target on login redirects.
    view_path: String,
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        store: Arc<dyn CredentialStore>,
        csrf: Arc<dyn CsrfTokenProvider>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-requested-with",
            HeaderValue::from_static("XMLHttpRequest"),
        );

        let http = ClientBuilder::new()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::config(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            store,
            csrf,
            navigator,
            view_path: "/dashboard".to_string(),
        })
    }

    pub fn with_view_path(mut self, path: &str) -> Self {
        self.view_path = path.to_string();
        self
    }

    /// GET the analytics document for the current reporting period.
    pub async fn get_analytics(&self) -> Result<AnalyticsPayload, ApiError> {
        self.get_json(ANALYTICS_PATH).await
    }

    /// GET a resource and decode the unwrapped body. On failure the error is
    /// classified, auth side effects are applied, and the envelope returned.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let result = self.dispatch(path).await;
        if let Err(err) = &result {
            let action = err.auth_action(&self.view_path);
            session::apply_auth_action(&action, self.store.as_ref(), self.navigator.as_ref());
        }
        result
    }

    async fn dispatch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.get(&url);

        if let Some(token) = self.store.token() {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))?;
            request = request.header(AUTHORIZATION, value);
        }
        if let Some(csrf) = self.csrf.csrf_token() {
            let value = HeaderValue::from_str(&csrf)?;
            request = request.header("x-csrf-token", value);
        }

        let response = request.send().await.map_err(|e| {
            debug!(url = %url, error = %e, "Request did not complete");
            if e.is_builder() {
                // The request was never constructed (bad URL or similar),
                // so this is a configuration problem, not a network one.
                ApiError::config(e)
            } else {
                ApiError::network()
            }
        })?;

        let status = response.status();
        let body_text = response.text().await.map_err(|e| {
            debug!(url = %url, error = %e, "Failed to read response body");
            ApiError::network()
        })?;

        // Non-JSON bodies are carried through as plain strings rather than
        // dropped, matching how the original API consumers saw them.
        let body: Value =
            serde_json::from_str(&body_text).unwrap_or_else(|_| Value::String(body_text));

        if status.is_success() {
            // API convention: a 2xx response can still declare failure.
            if body.get("success").and_then(Value::as_bool) == Some(false) {
                let message = body
                    .get("message")
                    .and_then(Value::as_str)
                    .filter(|m| !m.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| "Request failed".to_string());
                return Err(ApiError::http(status.as_u16(), Some(message), Some(body)));
            }
            serde_json::from_value(body.clone()).map_err(|e| {
                debug!(url = %url, error = %e, "Response body did not match expected shape");
                ApiError::http(
                    status.as_u16(),
                    Some("Request failed".to_string()),
                    Some(body),
                )
            })
        } else {
            let server_message = body
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string);
            let raw_body = if body == Value::String(String::new()) {
                None
            } else {
                Some(body)
            };
            Err(ApiError::http(status.as_u16(), server_message, raw_body))
        }
    }
}
