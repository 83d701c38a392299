//! Login rate limiter for brute force protection
//!
//! Tracks failed login attempts per client identifier (username or IP) in a
//! fixed window and locks the client out once the threshold is reached. State
//! lives in memory for the application's lifetime; a successful login clears
//! the client's counter.

use dashmap::DashMap;
use std::time::{Duration, Instant};
use tracing::warn;

use crate::config::LoginLimitConfig;
use crate::utils::error::{ConsoleError, Result};

/// Brute force protection for the login form
pub struct LoginRateLimiter {
    /// Map of client identifier -> attempt window
    attempts: DashMap<String, AttemptWindow>,
    /// Failed attempts tolerated per window
    max_attempts: u32,
    /// Length of the counting window
    window: Duration,
    /// How long a tripped client stays locked out
    lockout: Duration,
}

/// Failed-attempt state for a single client
struct AttemptWindow {
    failures: u32,
    window_start: Instant,
    locked_until: Option<Instant>,
}

impl AttemptWindow {
    fn fresh(now: Instant) -> Self {
        Self {
            failures: 0,
            window_start: now,
            locked_until: None,
        }
    }
}

impl LoginRateLimiter {
    pub fn new(config: &LoginLimitConfig) -> Self {
        Self {
            attempts: DashMap::new(),
            max_attempts: config.max_attempts,
            window: Duration::from_secs(config.window_secs),
            lockout: Duration::from_secs(config.lockout_secs),
        }
    }

    /// Check whether `client_id` may attempt a login right now.
    ///
    /// Returns `ConsoleError::RateLimited` with the remaining lockout in
    /// seconds while the client is locked out. An expired window resets the
    /// failure counter.
    pub fn check_allowed(&self, client_id: &str) -> Result<()> {
        let now = Instant::now();
        let mut entry = self
            .attempts
            .entry(client_id.to_string())
            .or_insert_with(|| AttemptWindow::fresh(now));
        let window = entry.value_mut();

        if let Some(locked_until) = window.locked_until {
            if now < locked_until {
                let remaining = locked_until.duration_since(now).as_secs().max(1);
                return Err(ConsoleError::RateLimited(remaining));
            }
            // Lockout elapsed, start over with a clean slate.
            *window = AttemptWindow::fresh(now);
        }

        if now.duration_since(window.window_start) > self.window {
            window.failures = 0;
            window.window_start = now;
        }

        Ok(())
    }

    /// Record a failed login. Returns the lockout length in seconds when this
    /// failure trips the threshold.
    pub fn record_failure(&self, client_id: &str) -> Option<u64> {
        let now = Instant::now();
        let mut entry = self
            .attempts
            .entry(client_id.to_string())
            .or_insert_with(|| AttemptWindow::fresh(now));
        let window = entry.value_mut();

        window.failures += 1;
        if window.failures >= self.max_attempts {
            window.locked_until = Some(now + self.lockout);
            window.failures = 0;

            let lockout_secs = self.lockout.as_secs();
            warn!(
                "Client {} locked out for {} seconds after repeated login failures",
                client_id, lockout_secs
            );
            return Some(lockout_secs);
        }

        None
    }

    /// Record a successful login, clearing the client's failure state.
    pub fn record_success(&self, client_id: &str) {
        self.attempts.remove(client_id);
    }

    /// Failed attempts the client has left before lockout.
    pub fn remaining_attempts(&self, client_id: &str) -> u32 {
        match self.attempts.get(client_id) {
            Some(entry) => self.max_attempts.saturating_sub(entry.failures),
            None => self.max_attempts,
        }
    }
}

impl std::fmt::Debug for LoginRateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRateLimiter")
            .field("max_attempts", &self.max_attempts)
            .field("window", &self.window)
            .field("lockout", &self.lockout)
            .field("tracked_clients", &self.attempts.len())
            .finish()
    }
}
