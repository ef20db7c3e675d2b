/// Escape sequence the dictionary uses for line breaks inside translations
const ESCAPED_NEWLINE: &str = "\\n";

/// A single dictionary hit: headword, pronunciation aid and translation text.
///
/// The translation is kept exactly as stored; escaped newline markers are only
/// expanded when the record is formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRecord {
    key: String,
    transliteration: String,
    translation: String,
}

impl LookupRecord {
    pub fn new(
        key: impl Into<String>,
        transliteration: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            transliteration: transliteration.into(),
            translation: translation.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn transliteration(&self) -> &str {
        &self.transliteration
    }

    /// Raw translation text, escape markers included
    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// Presentation form: one field per line, translation unescaped.
    pub fn format(&self) -> String {
        format!(
            "{}\n{}\n{}",
            self.key,
            self.transliteration,
            unescape_newlines(&self.translation)
        )
    }
}

/// Replace every literal `\n` marker with a real line break
pub fn unescape_newlines(text: &str) -> String {
    text.replace(ESCAPED_NEWLINE, "\n")
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
