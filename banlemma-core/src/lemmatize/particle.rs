//! Adverb and postposition pipelines
//!
//! Both word classes inflect only for emphasis.

use super::scan::{StemGuard, SuffixScan};
use crate::category::Category;
use crate::data::tables::MarkerClass;
use crate::data::Resources;

/// Lemmatize an adverb
pub fn lemmatize_adverb(resources: &Resources, word: &str) -> String {
    strip_emphasis(resources, Category::Adverb, word)
}

/// Lemmatize a postposition
pub fn lemmatize_postposition(resources: &Resources, word: &str) -> String {
    strip_emphasis(resources, Category::Postposition, word)
}

fn strip_emphasis(resources: &Resources, category: Category, word: &str) -> String {
    let word = word.trim();
    if let Some(lemma) = resources.lookup(category, word) {
        return lemma.to_string();
    }

    let emphasis = SuffixScan::new(resources.suffixes(MarkerClass::Emphasis), StemGuard::Open);
    match emphasis.first(word) {
        Some((_, stem)) => resources
            .lookup(category, stem)
            .unwrap_or(stem)
            .to_string(),
        None => word.to_string(),
    }
}
