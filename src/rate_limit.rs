use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

/// Sliding-window violation tracking per user.
///
/// Timestamps older than the window are pruned on every access, so memory
/// stays proportional to recent offenders. All operations take `&self` and
/// are linearizable behind a single lock; contention is negligible next to
/// the regex work that precedes any call here.
#[derive(Debug)]
pub(crate) struct RateLimiter {
    window: Duration,
    max_violations: usize,
    violations: Mutex<HashMap<String, Vec<DateTime<Utc>>>>,
}

impl RateLimiter {
    pub(crate) fn new(window_minutes: i64, max_violations: usize) -> Self {
        RateLimiter {
            window: Duration::minutes(window_minutes),
            max_violations,
            violations: Mutex::new(HashMap::new()),
        }
    }

    /// Record a violation for a user at the current time.
    pub(crate) fn add_violation(&self, user_id: &str) {
        self.record(user_id, Utc::now());
    }

    /// Violations remaining in the window for a user.
    pub(crate) fn violation_count(&self, user_id: &str) -> usize {
        self.count_at(user_id, Utc::now())
    }

    /// Has the user met or exceeded the violation budget?
    pub(crate) fn is_rate_limited(&self, user_id: &str) -> bool {
        self.count_at(user_id, Utc::now()) >= self.max_violations
    }

    fn record(&self, user_id: &str, now: DateTime<Utc>) {
        let mut map = self.lock();
        let entry = map.entry(user_id.to_string()).or_default();
        entry.push(now);
        Self::prune(entry, now - self.window);
    }

    fn count_at(&self, user_id: &str, now: DateTime<Utc>) -> usize {
        let mut map = self.lock();
        let count = match map.get_mut(user_id) {
            Some(entry) => {
                Self::prune(entry, now - self.window);
                entry.len()
            }
            None => return 0,
        };
        if count == 0 {
            map.remove(user_id);
        }
        count
    }

    fn prune(entry: &mut Vec<DateTime<Utc>>, cutoff: DateTime<Utc>) {
        entry.retain(|t| *t > cutoff);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<DateTime<Utc>>>> {
        // A poisoned lock only means another thread panicked mid-update;
        // the map is still a valid set of timestamps.
        self.violations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
