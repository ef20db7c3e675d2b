//! Search coordination
//!
//! [`RequestDebouncer`] turns a stream of per-keystroke search requests into
//! at most one lookup per quiet period per requester.

mod debouncer;
mod pending;
mod types;

pub use debouncer::RequestDebouncer;
pub use types::{DEFAULT_QUIET_INTERVAL_MS, DEFAULT_SHUTDOWN_GRACE_MS, SearchConfig, Submission};
