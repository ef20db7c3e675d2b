//! bkrs library - Chinese dictionary lookup with debounced search-as-you-type
//!
//! The core is [`search::RequestDebouncer`]: it coalesces bursts of search
//! requests per requester, looks up only the last one and hands the answer to a
//! [`dispatch::ResultDispatcher`]. Transports (chat bots, consoles) plug in
//! through the [`lookup::LookupService`] and dispatcher traits.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod lookup;
pub mod search;

// Re-export commonly used types for convenience
pub use config::Config;
pub use dispatch::{Answer, ResultDispatcher};
pub use error::BkrsError;
pub use lookup::{Dictionary, LookupRecord, LookupService};
pub use search::{RequestDebouncer, SearchConfig, Submission};
