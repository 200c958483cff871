//! Collaborator boundaries around the transport layer: credential storage,
//! CSRF tokens, and navigation. The transport client classifies failures;
//! the thin boundary here decides what to actually do about them, so the
//! core stays testable without a real navigation environment.

use crate::error::AuthAction;
use std::sync::RwLock;
use tracing::{info, warn};

/// Local credential storage for the bearer token.
pub trait CredentialStore: Send + Sync {
    fn token(&self) -> Option<String>;
    fn clear(&self);
}

/// Source of the anti-CSRF token, if the deployment uses one.
pub trait CsrfTokenProvider: Send + Sync {
    fn csrf_token(&self) -> Option<String>;
}

/// Navigation capability: send the user somewhere else.
pub trait Navigator: Send + Sync {
    fn redirect(&self, path: &str);
}

/// Carry out an auth decision. Fire-and-forget: outcomes are logged, never
/// reported back through the error channel.
pub fn apply_auth_action(
    action: &AuthAction,
    store: &dyn CredentialStore,
    navigator: &dyn Navigator,
) {
    match action {
        AuthAction::None => {}
        AuthAction::Login { return_to } => {
            store.clear();
            info!(return_to = %return_to, "Session expired, redirecting to login");
            navigator.redirect(return_to);
        }
        AuthAction::Forbidden => {
            navigator.redirect("/forbidden");
        }
    }
}

/// Credential store seeded from an environment variable at startup. The
/// token lives in memory afterwards so `clear` works without touching the
/// process environment.
pub struct EnvCredentialStore {
    token: RwLock<Option<String>>,
}

impl EnvCredentialStore {
    pub fn from_env(var: &str) -> Self {
        Self {
            token: RwLock::new(std::env::var(var).ok().filter(|t| !t.is_empty())),
        }
    }
}

impl CredentialStore for EnvCredentialStore {
    fn token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(|p| p.into_inner()).clone()
    }

    fn clear(&self) {
        self.token.write().unwrap_or_else(|p| p.into_inner()).take();
    }
}

/// CSRF provider seeded from an environment variable at startup.
pub struct EnvCsrfProvider {
    token: Option<String>,
}

impl EnvCsrfProvider {
    pub fn from_env(var: &str) -> Self {
        Self {
            token: std::env::var(var).ok().filter(|t| !t.is_empty()),
        }
    }
}

impl CsrfTokenProvider for EnvCsrfProvider {
    fn csrf_token(&self) -> Option<String> {
        self.token.clone()
    }
}

/// Navigator for the headless binary: there is no browser to move, so a
/// redirect is surfaced as a log line.
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn redirect(&self, path: &str) {
        warn!(path = %path, "Navigation requested");
    }
}
