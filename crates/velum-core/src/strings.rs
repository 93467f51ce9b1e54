//! Localized string table parsing and merging.
//!
//! Storage and lookup of app-wide strings belong to the host; this module is
//! only the glue that turns a `"KEY" = "VALUE";` strings file into entries
//! and folds them into a per-language table.

use indexmap::IndexMap;

use crate::text::{trim, TrimSide};

/// Parses the `"KEY" = "VALUE";` strings-file format. Lines that do not
/// contain a `=` are skipped.
pub fn parse_table(source: &str) -> IndexMap<String, String> {
    let mut entries = IndexMap::new();
    for line in source.split(';') {
        let line = trim(line, None, TrimSide::Both);
        if line.is_empty() {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = unquote(key);
        let value = unquote(value);
        if key.is_empty() {
            continue;
        }
        entries.insert(key.to_owned(), value.to_owned());
    }
    entries
}

fn unquote(raw: &str) -> &str {
    trim(trim(raw, None, TrimSide::Both), Some('"'), TrimSide::Both)
}

/// Per-language localized string entries.
#[derive(Clone, Debug, Default)]
pub struct StringTable {
    languages: IndexMap<String, IndexMap<String, String>>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds `entries` into `language`. With `override_existing`, incoming
    /// values replace stored ones; otherwise stored values win and only new
    /// keys are added.
    pub fn merge(
        &mut self,
        language: &str,
        entries: IndexMap<String, String>,
        override_existing: bool,
    ) {
        let table = self.languages.entry(language.to_owned()).or_default();
        for (key, value) in entries {
            if override_existing || !table.contains_key(&key) {
                table.insert(key, value);
            }
        }
    }

    pub fn lookup(&self, language: &str, key: &str) -> Option<&str> {
        self.languages
            .get(language)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    pub fn language(&self, language: &str) -> Option<&IndexMap<String, String>> {
        self.languages.get(language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quoted_entries() {
        let entries = parse_table(r#" "CLOSE" = "Close"; "PREVIEW" = "Preview"; "#);
        assert_eq!(entries.get("CLOSE").map(String::as_str), Some("Close"));
        assert_eq!(entries.get("PREVIEW").map(String::as_str), Some("Preview"));
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn skips_blank_and_malformed_lines() {
        let entries = parse_table("; ;\n \"OK\" = \"Ok\"; garbage ;");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries.get("OK").map(String::as_str), Some("Ok"));
    }

    #[test]
    fn merge_override_replaces_existing_values() {
        let mut table = StringTable::new();
        table.merge("en", parse_table(r#""CLOSE" = "Close";"#), true);
        table.merge("en", parse_table(r#""CLOSE" = "Shut"; "NEW" = "New";"#), true);
        assert_eq!(table.lookup("en", "CLOSE"), Some("Shut"));
        assert_eq!(table.lookup("en", "NEW"), Some("New"));
    }

    #[test]
    fn merge_without_override_keeps_existing_values() {
        let mut table = StringTable::new();
        table.merge("en", parse_table(r#""CLOSE" = "Close";"#), true);
        table.merge("en", parse_table(r#""CLOSE" = "Shut"; "NEW" = "New";"#), false);
        assert_eq!(table.lookup("en", "CLOSE"), Some("Close"));
        assert_eq!(table.lookup("en", "NEW"), Some("New"));
    }

    #[test]
    fn languages_are_independent() {
        let mut table = StringTable::new();
        table.merge("en", parse_table(r#""CLOSE" = "Close";"#), true);
        table.merge("de", parse_table(r#""CLOSE" = "Schließen";"#), true);
        assert_eq!(table.lookup("de", "CLOSE"), Some("Schließen"));
        assert_eq!(table.lookup("fr", "CLOSE"), None);
    }

    #[test]
    fn language_exposes_the_merged_entries() {
        let mut table = StringTable::new();
        table.merge("en", parse_table(r#""CLOSE" = "Close"; "NEW" = "New";"#), true);
        let entries = table.language("en").expect("merged language");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.get("NEW").map(String::as_str), Some("New"));
        assert!(table.language("fr").is_none());
    }
}
