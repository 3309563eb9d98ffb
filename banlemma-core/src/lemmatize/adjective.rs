//! Adjective pipeline

use super::scan::{StemGuard, SuffixScan};
use crate::category::Category;
use crate::data::tables::MarkerClass;
use crate::data::Resources;

/// Lemmatize an adjective.
///
/// At most one emphasis marker and one degree marker are removed, each the
/// first match in table order.
pub fn lemmatize_adjective(resources: &Resources, word: &str) -> String {
    let mut word = word.trim();
    if let Some(lemma) = resources.lookup(Category::Adjective, word) {
        return lemma.to_string();
    }

    let emphasis = SuffixScan::new(resources.suffixes(MarkerClass::Emphasis), StemGuard::Open);
    if let Some((_, stem)) = emphasis.first(word) {
        if let Some(lemma) = resources.lookup(Category::Adjective, stem) {
            return lemma.to_string();
        }
        word = stem;
    }

    let degree = SuffixScan::new(resources.suffixes(MarkerClass::Degree), StemGuard::Open);
    if let Some((_, stem)) = degree.first(word) {
        word = stem;
    }

    word.to_string()
}
