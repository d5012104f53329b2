//! Batch reporting: run the grid search for a list of words and collect the results.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::grid::Grid;
use crate::search::contains;

/// Word -> found, in the order the words were first given.
///
/// Keys are the words exactly as given (not case-folded). Inserting a word a second
/// time replaces its result but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<(String, bool)>,
    index: HashMap<String, usize>,
}

impl Report {
    #[must_use]
    pub fn new() -> Report {
        Report::default()
    }

    /// Record `found` for `word`, returning the previous result if the word was already present.
    pub fn insert(&mut self, word: impl Into<String>, found: bool) -> Option<bool> {
        let word = word.into();
        if let Some(&i) = self.index.get(&word) {
            Some(std::mem::replace(&mut self.entries[i].1, found))
        } else {
            self.index.insert(word.clone(), self.entries.len());
            self.entries.push((word, found));
            None
        }
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<bool> {
        self.index.get(word).map(|&i| self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.entries.iter().map(|(w, found)| (w.as_str(), *found))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of words that were found.
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.entries.iter().filter(|(_, found)| *found).count()
    }

    /// The report as a JSON object indented by four spaces, keys in insertion order.
    ///
    /// # Errors
    ///
    /// Only if the serializer fails to write, which does not happen for an in-memory buffer.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only ever writes valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (word, found) in &self.entries {
            map.serialize_entry(word, found)?;
        }
        map.end()
    }
}

/// Search `grid` for each of `words`, in order, and collect the results.
///
/// Each word is case-folded for the search but keyed by its original text.
pub fn build_report<S: AsRef<str>>(grid: &Grid, words: &[S]) -> Report {
    let mut report = Report::new();
    for word in words {
        let word = word.as_ref();
        if report.insert(word, contains(grid, word)).is_some() {
            log::debug!("duplicate word {word:?} in word list");
        }
    }
    log::info!("Found {}/{} words in a {}x{} grid", report.found_count(), report.len(), grid.rows(), grid.cols());
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ab_grid() -> Grid {
        Grid::from_rows(&["AB", "CD"]).unwrap()
    }

    #[test]
    fn test_build_report_diagonals() {
        let report = build_report(&ab_grid(), &["AD", "DA", "BC", "AC", "ABD"]);
        assert_eq!(report.get("AD"), Some(true));
        assert_eq!(report.get("DA"), Some(true));
        assert_eq!(report.get("BC"), Some(true));
        assert_eq!(report.get("AC"), Some(true));
        assert_eq!(report.get("ABD"), Some(false));
    }

    #[test]
    fn test_keys_keep_original_case() {
        let report = build_report(&ab_grid(), &["ad", "Da"]);
        assert_eq!(report.get("ad"), Some(true));
        assert_eq!(report.get("Da"), Some(true));
        assert_eq!(report.get("AD"), None);
    }

    #[test]
    fn test_order_preserved() {
        let report = build_report(&ab_grid(), &["DA", "ZZ", "AB", "CB"]);
        let keys: Vec<&str> = report.iter().map(|(w, _)| w).collect();
        assert_eq!(keys, vec!["DA", "ZZ", "AB", "CB"]);
    }

    #[test]
    fn test_duplicate_word_keeps_first_position() {
        let report = build_report(&ab_grid(), &["AB", "XY", "AB"]);
        assert_eq!(report.len(), 2);
        let entries: Vec<(&str, bool)> = report.iter().collect();
        assert_eq!(entries, vec![("AB", true), ("XY", false)]);
    }

    #[test]
    fn test_insert_overwrites_value() {
        let mut report = Report::new();
        assert_eq!(report.insert("CAT", false), None);
        assert_eq!(report.insert("DOG", true), None);
        assert_eq!(report.insert("CAT", true), Some(false));
        assert_eq!(report.iter().collect::<Vec<_>>(), vec![("CAT", true), ("DOG", true)]);
    }

    #[test]
    fn test_empty_word_list() {
        let words: Vec<String> = vec![];
        let report = build_report(&ab_grid(), &words);
        assert!(report.is_empty());
        assert_eq!(report.to_json_pretty().unwrap(), "{}");
    }

    #[test]
    fn test_found_count() {
        let report = build_report(&ab_grid(), &["AB", "BA", "QQ"]);
        assert_eq!(report.found_count(), 2);
    }

    #[test]
    fn test_json_layout() {
        let report = build_report(&ab_grid(), &["DA", "ZZ", "ab"]);
        assert_eq!(
            report.to_json_pretty().unwrap(),
            "{\n    \"DA\": true,\n    \"ZZ\": false,\n    \"ab\": true\n}"
        );
    }

    #[test]
    fn test_idempotent() {
        let words = ["AD", "DA", "BC", "XX"];
        assert_eq!(build_report(&ab_grid(), &words), build_report(&ab_grid(), &words));
    }
}
