use crate::lookup::LookupRecord;

/// Payload handed to a dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Formatted dictionary entry
    Found(String),
    /// A completed search found nothing (storage faults included)
    NotFound { query: String },
    /// Empty query; the caller should show no results
    Empty,
}

impl Answer {
    pub fn from_lookup(query: &str, record: Option<&LookupRecord>) -> Self {
        match record {
            Some(record) => Answer::Found(record.format()),
            None => Answer::NotFound {
                query: query.to_string(),
            },
        }
    }

    /// User-facing text
    pub fn render(&self) -> String {
        match self {
            Answer::Found(text) => text.clone(),
            Answer::NotFound { query } => format!("Word '{}' not found", query),
            Answer::Empty => String::new(),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Answer::Found(_))
    }
}
