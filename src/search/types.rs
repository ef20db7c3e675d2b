//! Search coordinator types

use std::time::Duration;

pub const DEFAULT_QUIET_INTERVAL_MS: u64 = 500;
pub const DEFAULT_SHUTDOWN_GRACE_MS: u64 = 1000;

/// Tunables for [`RequestDebouncer`](super::RequestDebouncer)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// How long a submission must stay unsuperseded before its lookup runs
    pub quiet_interval: Duration,
    /// Upper bound on how long shutdown waits for running tasks
    pub shutdown_grace: Duration,
    /// Whether a lookup that started before its search was superseded still
    /// delivers to the original target
    pub deliver_superseded: bool,
}

impl SearchConfig {
    pub fn with_quiet_interval(mut self, quiet_interval: Duration) -> Self {
        self.quiet_interval = quiet_interval;
        self
    }

    pub fn with_deliver_superseded(mut self, deliver_superseded: bool) -> Self {
        self.deliver_superseded = deliver_superseded;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            quiet_interval: Duration::from_millis(DEFAULT_QUIET_INTERVAL_MS),
            shutdown_grace: Duration::from_millis(DEFAULT_SHUTDOWN_GRACE_MS),
            deliver_superseded: true,
        }
    }
}

/// What `submit` did with a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// A lookup was scheduled under this sequence number
    Scheduled { seq: u64 },
    /// Empty query: pending work was cleared and an empty answer dispatched
    Cleared,
}
