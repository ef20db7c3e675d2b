//! Result delivery
//!
//! The coordinator hands every finished search to a [`ResultDispatcher`]
//! together with the target captured when the search was submitted. Delivery
//! may fail (an expired inline query, a closed chat, a broken pipe); the
//! failure comes back as a [`DeliveryError`] and is only ever logged.

mod answer;
mod console;

pub use answer::Answer;
pub use console::ConsoleDispatcher;

use futures::future::BoxFuture;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    /// The request the answer belonged to is no longer valid
    #[error("Delivery target expired: {0}")]
    Expired(String),

    #[error("Delivery transport error: {0}")]
    Transport(String),
}

/// Sink for finished searches
pub trait ResultDispatcher<T>: Send + Sync {
    fn deliver(&self, target: T, answer: Answer) -> BoxFuture<'_, Result<(), DeliveryError>>;
}
