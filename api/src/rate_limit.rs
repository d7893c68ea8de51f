use std::collections::HashMap;
use std::net::IpAddr;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

/// Sliding-window length.
const WINDOW: Duration = Duration::from_secs(60);

/// Accepted requests per client per window.
const MAX_REQUESTS_PER_WINDOW: usize = 60;

/// Map size at which drained client entries are swept out. Keeps key growth
/// across distinct clients bounded instead of process-lifetime unbounded.
const SWEEP_KEY_THRESHOLD: usize = 1024;

/// Per-client sliding-window request counter. In-process memory only: state
/// resets on restart and is not coordinated across instances.
///
/// The timestamp map is behind an async `RwLock`; handlers run on a
/// multi-threaded runtime, so unsynchronized mutation would race.
pub struct RateLimiter {
    windows: RwLock<HashMap<IpAddr, Vec<Instant>>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            windows: RwLock::new(HashMap::new()),
        }
    }

    /// Admit or reject a request from `client`. Returns true when admitted.
    pub async fn check(&self, client: IpAddr) -> bool {
        self.check_at(client, Instant::now()).await
    }

    /// Same as [`check`](Self::check) with an explicit clock, so tests can
    /// move time instead of sleeping.
    pub async fn check_at(&self, client: IpAddr, now: Instant) -> bool {
        let mut windows = self.windows.write().await;

        if windows.len() > SWEEP_KEY_THRESHOLD {
            windows.retain(|_, stamps| {
                stamps
                    .last()
                    .is_some_and(|last| now.duration_since(*last) < WINDOW)
            });
        }

        let stamps = windows.entry(client).or_default();
        stamps.retain(|stamp| now.duration_since(*stamp) < WINDOW);

        if stamps.len() >= MAX_REQUESTS_PER_WINDOW {
            return false;
        }

        stamps.push(now);
        true
    }

    /// Number of clients currently tracked.
    #[cfg(test)]
    async fn tracked_clients(&self) -> usize {
        self.windows.read().await.len()
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}
