//! Dictionary lookup
//!
//! The search coordinator treats lookup as an opaque synchronous call. Anything
//! that can answer "is this key in the dictionary" implements [`LookupService`].
//! Implementations may block on I/O; the coordinator runs them on the blocking pool.

mod dictionary;
mod record;

pub use dictionary::{Dictionary, DictionaryEntry};
pub use record::LookupRecord;

use std::sync::Arc;

use thiserror::Error;

/// Transient storage faults. The coordinator folds these into "not found".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Dictionary unavailable: {0}")]
    Unavailable(String),
}

/// Exact-match key lookup
pub trait LookupService: Send + Sync {
    /// `Ok(None)` means the key is absent; `Err` is a transient fault.
    fn lookup(&self, key: &str) -> Result<Option<LookupRecord>, LookupError>;
}

impl<L: LookupService + ?Sized> LookupService for Arc<L> {
    fn lookup(&self, key: &str) -> Result<Option<LookupRecord>, LookupError> {
        (**self).lookup(key)
    }
}
