//! In-memory dictionary
//!
//! Exact-match table built from a JSON array of entries. Translations are kept
//! raw; escaped newlines are expanded later by [`LookupRecord::format`].

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{LookupError, LookupRecord, LookupService};
use crate::error::BkrsError;

/// One row of the dictionary file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DictionaryEntry {
    pub hanzi: String,
    pub pinyin: String,
    pub translation: String,
}

#[derive(Debug, Default)]
pub struct Dictionary {
    entries: HashMap<String, LookupRecord>,
}

impl Dictionary {
    /// Build from entries. The first entry for a headword wins.
    pub fn from_entries(entries: impl IntoIterator<Item = DictionaryEntry>) -> Self {
        let mut map = HashMap::new();
        for entry in entries {
            map.entry(entry.hanzi.clone()).or_insert_with(|| {
                LookupRecord::new(entry.hanzi, entry.pinyin, entry.translation)
            });
        }
        Self { entries: map }
    }

    /// Load a JSON dictionary file
    pub fn load(path: &Path) -> Result<Self, BkrsError> {
        let contents = fs::read_to_string(path)?;
        let entries: Vec<DictionaryEntry> =
            serde_json::from_str(&contents).map_err(|e| BkrsError::Dictionary {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let dictionary = Self::from_entries(entries);
        log::debug!(
            "Loaded {} dictionary entries from {:?}",
            dictionary.len(),
            path
        );
        Ok(dictionary)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LookupService for Dictionary {
    fn lookup(&self, key: &str) -> Result<Option<LookupRecord>, LookupError> {
        Ok(self.entries.get(key).cloned())
    }
}

#[cfg(test)]
#[path = "dictionary_tests.rs"]
mod dictionary_tests;
