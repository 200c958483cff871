//! Analytics fetch lifecycle: `idle -> loading -> (success | fallback)`.
//!
//! The fetcher owns the observable [`FetchState`] and guarantees two things
//! regardless of how the transport behaves: `loading` is cleared on every
//! exit path, and a stale response never overwrites the result of a more
//! recently issued request.

use crate::error::ApiError;
use crate::payload::AnalyticsPayload;
use crate::transport::ApiClient;
use std::str::FromStr;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

/// Observable state container driving the presentation layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchState {
    pub data: AnalyticsPayload,
    pub loading: bool,
    pub error: Option<ApiError>,
    pub using_fallback: bool,
}

/// What to show when the live fetch fails. The substitution itself is
/// unconditional (the dashboard never goes blank); the policy only picks
/// the substitute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Substitute the bundled sample document.
    #[default]
    SampleData,
    /// Substitute an empty document.
    Empty,
}

impl FallbackPolicy {
    fn substitute(&self) -> AnalyticsPayload {
        match self {
            FallbackPolicy::SampleData => AnalyticsPayload::sample(),
            FallbackPolicy::Empty => AnalyticsPayload::default(),
        }
    }
}

impl FromStr for FallbackPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sample" | "sample-data" => Ok(FallbackPolicy::SampleData),
            "empty" => Ok(FallbackPolicy::Empty),
            other => Err(format!("unknown fallback policy: {}", other)),
        }
    }
}

pub struct AnalyticsFetcher {
    client: ApiClient,
    policy: FallbackPolicy,
    state: Mutex<FetchState>,
    /// Sequence number of the most recently issued request. Results from
    /// older sequence numbers are discarded on arrival.
    issued: AtomicU64,
}

impl AnalyticsFetcher {
    pub fn new(client: ApiClient, policy: FallbackPolicy) -> Self {
        Self {
            client,
            policy,
            state: Mutex::new(FetchState::default()),
            issued: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FetchState {
        self.lock_state().clone()
    }

    /// Run one fetch cycle and return the state after it settles. Every call
    /// restarts the lifecycle from `loading`, discarding prior error and
    /// fallback flags until the new attempt settles.
    pub async fn load_analytics(&self) -> FetchState {
        let seq = self.begin();
        let guard = SettleGuard { fetcher: self, seq };
        let result = self.client.get_analytics().await;
        self.settle(seq, result);
        std::mem::forget(guard);
        self.state()
    }

    /// Issue a new sequence number and transition to `loading`.
    fn begin(&self) -> u64 {
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let mut state = self.lock_state();
        state.loading = true;
        state.error = None;
        state.using_fallback = false;
        seq
    }

    /// Apply a settled result, unless a newer request has been issued since.
    fn settle(&self, seq: u64, result: Result<AnalyticsPayload, ApiError>) {
        if seq != self.issued.load(Ordering::SeqCst) {
            debug!(seq, "Discarding stale analytics response");
            return;
        }

        let mut state = self.lock_state();
        match result {
            Ok(payload) => {
                state.data = payload;
                state.error = None;
                state.using_fallback = false;
            }
            Err(err) => {
                warn!(error = %err, "Analytics fetch failed, showing fallback data");
                state.data = self.policy.substitute();
                state.error = Some(err);
                state.using_fallback = true;
            }
        }
        state.loading = false;
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, FetchState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Clears `loading` if a fetch unwinds before settling, so the view never
/// hangs on a spinner. Forgotten on the normal path once `settle` ran.
struct SettleGuard<'a> {
    fetcher: &'a AnalyticsFetcher,
    seq: u64,
}

impl Drop for SettleGuard<'_> {
    fn drop(&mut self) {
        if self.seq == self.fetcher.issued.load(Ordering::SeqCst) {
            self.fetcher.lock_state().loading = false;
        }
    }
}
