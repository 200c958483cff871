//! Client library for a social-media analytics dashboard. Fetches the
//! analytics document from the reporting API, normalizes transport failures
//! into a single error shape, substitutes bundled sample data when the live
//! fetch fails, and derives the summary stats the dashboard displays.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod fetcher;
pub mod metrics;
pub mod payload;
pub mod session;
pub mod transport;

pub use config::AppConfig;
pub use error::{ApiError, AuthAction, NETWORK_ERROR_MESSAGE};
pub use fetcher::{AnalyticsFetcher, FallbackPolicy, FetchState};
pub use payload::AnalyticsPayload;
pub use session::{CredentialStore, CsrfTokenProvider, Navigator};
pub use transport::ApiClient;
