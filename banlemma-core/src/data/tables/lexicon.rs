//! Per-category word to lemma store

use crate::category::Category;
use crate::data::bundle::Dictionary;
use crate::error::{DataError, Result};
use std::collections::HashMap;

/// Exact surface form to lemma mappings, one map per lexical category
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    maps: [HashMap<String, String>; 6],
}

impl Lexicon {
    /// Build from a bundle dictionary; every lexical category must be present
    pub fn from_dictionary(dictionary: &Dictionary) -> Result<Self> {
        let mut lexicon = Self::default();

        for category in Category::LEXICAL {
            let (Some(key), Some(slot)) = (category.lexicon_key(), category.index()) else {
                continue;
            };
            let entries = dictionary
                .get(key)
                .ok_or_else(|| DataError::MissingCategory(key.to_string()))?;
            lexicon.maps[slot] = entries.clone();
        }

        Ok(lexicon)
    }

    /// Look up the lemma of an exact surface form
    #[inline]
    pub fn lookup(&self, category: Category, word: &str) -> Option<&str> {
        let slot = category.index()?;
        self.maps[slot].get(word).map(String::as_str)
    }

    /// Number of entries in a category's lexicon
    pub fn len(&self, category: Category) -> usize {
        category.index().map_or(0, |slot| self.maps[slot].len())
    }

    /// Whether every lexicon is empty
    pub fn is_empty(&self) -> bool {
        self.maps.iter().all(HashMap::is_empty)
    }
}
