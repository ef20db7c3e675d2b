// Configuration type definitions

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::search::{DEFAULT_QUIET_INTERVAL_MS, DEFAULT_SHUTDOWN_GRACE_MS, SearchConfig};

/// Search coordinator section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchSection {
    #[serde(default = "default_quiet_interval_ms")]
    pub quiet_interval_ms: u64,
    #[serde(default = "default_shutdown_grace_ms")]
    pub shutdown_grace_ms: u64,
    #[serde(default = "default_deliver_superseded")]
    pub deliver_superseded: bool,
}

fn default_quiet_interval_ms() -> u64 {
    DEFAULT_QUIET_INTERVAL_MS
}

fn default_shutdown_grace_ms() -> u64 {
    DEFAULT_SHUTDOWN_GRACE_MS
}

fn default_deliver_superseded() -> bool {
    true
}

impl Default for SearchSection {
    fn default() -> Self {
        SearchSection {
            quiet_interval_ms: DEFAULT_QUIET_INTERVAL_MS,
            shutdown_grace_ms: DEFAULT_SHUTDOWN_GRACE_MS,
            deliver_superseded: true,
        }
    }
}

/// Dictionary section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DictionaryConfig {
    #[serde(default = "default_dictionary_path")]
    pub path: PathBuf,
}

fn default_dictionary_path() -> PathBuf {
    PathBuf::from("dictionary.json")
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        DictionaryConfig {
            path: default_dictionary_path(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchSection,
    #[serde(default)]
    pub dictionary: DictionaryConfig,
}

impl From<&SearchSection> for SearchConfig {
    fn from(section: &SearchSection) -> Self {
        SearchConfig {
            quiet_interval: Duration::from_millis(section.quiet_interval_ms),
            shutdown_grace: Duration::from_millis(section.shutdown_grace_ms),
            deliver_superseded: section.deliver_superseded,
        }
    }
}

impl From<&Config> for SearchConfig {
    fn from(config: &Config) -> Self {
        SearchConfig::from(&config.search)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
