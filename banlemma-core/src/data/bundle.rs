//! Data bundle structures and validation
//!
//! This module defines the on-disk JSON schema of a prepared bundle: the
//! word-lemma dictionary, the marker tables and the verb suffix rules.

use crate::category::Category;
use crate::data::tables::MarkerClass;
use crate::error::{DataError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// File name of the word-lemma dictionary inside a bundle directory
pub const DICTIONARY_FILE: &str = "dictionary.json";
/// File name of the marker tables inside a bundle directory
pub const MARKERS_FILE: &str = "markers.json";
/// File name of the verb suffix rules inside a bundle directory
pub const SUFFIXES_FILE: &str = "suffixes.json";

/// Key of the verb rule list in `suffixes.json`
pub const VERB_RULES_KEY: &str = "verbs";

/// Per-category word-lemma maps, keyed by lexicon name (`nouns`, `verbs`, ...)
pub type Dictionary = HashMap<String, HashMap<String, String>>;

/// Raw bundle contents, as prepared offline
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataBundle {
    /// `dictionary.json`
    pub dictionary: Dictionary,
    /// `markers.json`: marker class name to suffix list
    pub markers: HashMap<String, Vec<String>>,
    /// `suffixes.json`: rule list name to suffix list
    pub suffixes: HashMap<String, Vec<String>>,
}

impl DataBundle {
    /// Parse a bundle from the contents of its three files
    pub fn from_json_strs(dictionary: &str, markers: &str, suffixes: &str) -> Result<Self> {
        Ok(Self {
            dictionary: parse(DICTIONARY_FILE, dictionary)?,
            markers: parse(MARKERS_FILE, markers)?,
            suffixes: parse(SUFFIXES_FILE, suffixes)?,
        })
    }

    /// Load a bundle from a directory holding the three JSON files
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        log::debug!("loading data bundle from {}", dir.display());

        let read = |name: &str| {
            let path = dir.join(name);
            fs::read_to_string(&path).map_err(|source| DataError::Io { path, source })
        };

        Self::from_json_strs(
            &read(DICTIONARY_FILE)?,
            &read(MARKERS_FILE)?,
            &read(SUFFIXES_FILE)?,
        )
    }

    /// The sample bundle compiled into this crate
    pub fn embedded() -> Result<Self> {
        Self::from_json_strs(
            include_str!("../../data/dictionary.json"),
            include_str!("../../data/markers.json"),
            include_str!("../../data/suffixes.json"),
        )
    }

    /// Check that every table the pipelines need is present
    pub fn validate(&self) -> Result<()> {
        for category in Category::LEXICAL {
            let key = category.lexicon_key().unwrap_or_default();
            if !self.dictionary.contains_key(key) {
                return Err(DataError::MissingCategory(key.to_string()));
            }
        }

        for class in MarkerClass::ALL {
            match self.markers.get(class.key()) {
                None => return Err(DataError::MissingMarkerClass(class.key().to_string())),
                Some(list) => check_suffixes(class.key(), list)?,
            }
        }

        match self.suffixes.get(VERB_RULES_KEY) {
            None => Err(DataError::MissingVerbRules),
            Some(list) => check_suffixes(VERB_RULES_KEY, list),
        }
    }
}

fn parse<T: for<'de> Deserialize<'de>>(file: &str, content: &str) -> Result<T> {
    serde_json::from_str(content).map_err(|source| DataError::Json {
        file: file.to_string(),
        source,
    })
}

fn check_suffixes(table: &str, suffixes: &[String]) -> Result<()> {
    if suffixes.iter().any(|s| s.is_empty()) {
        return Err(DataError::EmptySuffix {
            table: table.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKERS: &str = r#"{
        "emphasis": ["ই"],
        "cases": ["ের", "র"],
        "determiners": ["টা"],
        "plurals": ["গুলো"],
        "degree": ["তর"]
    }"#;

    const DICTIONARY: &str = r#"{
        "nouns": {"বই": "বই"},
        "pronouns": {},
        "adjectives": {},
        "verbs": {},
        "adverbs": {},
        "postpositions": {}
    }"#;

    #[test]
    fn test_bundle_deserialize() {
        let bundle =
            DataBundle::from_json_strs(DICTIONARY, MARKERS, r#"{"verbs": ["ছে"]}"#).unwrap();
        assert_eq!(bundle.dictionary["nouns"]["বই"], "বই");
        assert_eq!(bundle.markers["cases"].len(), 2);
        assert_eq!(bundle.suffixes["verbs"], vec!["ছে".to_string()]);
        assert!(bundle.validate().is_ok());
    }

    #[test]
    fn test_malformed_json_names_file() {
        let err = DataBundle::from_json_strs(DICTIONARY, "[not json", "{}").unwrap_err();
        match err {
            DataError::Json { file, .. } => assert_eq!(file, MARKERS_FILE),
            other => panic!("Expected Json error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_lexicon() {
        let dictionary = r#"{"nouns": {}}"#;
        let bundle =
            DataBundle::from_json_strs(dictionary, MARKERS, r#"{"verbs": []}"#).unwrap();
        match bundle.validate() {
            Err(DataError::MissingCategory(key)) => assert_eq!(key, "pronouns"),
            other => panic!("Expected MissingCategory, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_marker_class() {
        let markers = r#"{"emphasis": [], "cases": [], "determiners": [], "plurals": []}"#;
        let bundle =
            DataBundle::from_json_strs(DICTIONARY, markers, r#"{"verbs": []}"#).unwrap();
        match bundle.validate() {
            Err(DataError::MissingMarkerClass(key)) => assert_eq!(key, "degree"),
            other => panic!("Expected MissingMarkerClass, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_verb_rules() {
        let bundle = DataBundle::from_json_strs(DICTIONARY, MARKERS, "{}").unwrap();
        assert!(matches!(bundle.validate(), Err(DataError::MissingVerbRules)));
    }

    #[test]
    fn test_empty_suffix_rejected() {
        let bundle =
            DataBundle::from_json_strs(DICTIONARY, MARKERS, r#"{"verbs": ["ছে", ""]}"#).unwrap();
        match bundle.validate() {
            Err(DataError::EmptySuffix { table }) => assert_eq!(table, "verbs"),
            other => panic!("Expected EmptySuffix, got {other:?}"),
        }
    }

    #[test]
    fn test_embedded_bundle_is_valid() {
        let bundle = DataBundle::embedded().expect("embedded bundle should parse");
        bundle.validate().expect("embedded bundle should validate");
        assert!(bundle.dictionary["nouns"].contains_key("পৃথিবী"));
    }
}
