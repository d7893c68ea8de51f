use std::sync::Arc;

use crate::rate_limit::RateLimiter;

/// Shared state injected into every handler. Owns the rate limiter so state
/// is scoped to the service instance, not the process — tests can build a
/// fresh `AppState` and tear it down cleanly.
#[derive(Clone)]
pub struct AppState {
    pub limiter: Arc<RateLimiter>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            limiter: Arc::new(RateLimiter::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
