use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BkrsError {
    #[error("Failed to load dictionary {path:?}: {message}")]
    Dictionary { path: PathBuf, message: String },

    #[error("No tokio runtime available; construct the debouncer inside a runtime")]
    NoRuntime,

    #[error("Search coordinator has been shut down")]
    ShutDown,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
