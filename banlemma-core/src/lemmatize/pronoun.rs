//! Pronoun pipeline
//!
//! Same outside-in order as nouns, without the plural stage. Pronoun stems
//! are short and closed-class, so no virama guard is applied.

use super::scan::{strip, Scan, StemGuard, SuffixScan};
use crate::category::Category;
use crate::data::tables::MarkerClass;
use crate::data::Resources;

const GENITIVE: &str = "ের";
const PLURAL_GENITIVE: &str = "দের";

/// Lemmatize a pronoun
pub fn lemmatize_pronoun(resources: &Resources, word: &str) -> String {
    let word = word.trim();
    if let Some(lemma) = resources.lookup(Category::Pronoun, word) {
        return lemma.to_string();
    }

    let stage = |class: MarkerClass| {
        SuffixScan::new(resources.suffixes(class), StemGuard::Open)
            .with_lexicon(resources.lexicon(), Category::Pronoun)
    };

    let mut word = match stage(MarkerClass::Emphasis).longest(word) {
        Scan::Lemma(lemma) => return lemma.to_string(),
        Scan::Miss { longest, .. } => strip(word, longest),
    };

    match stage(MarkerClass::Cases).longest(word) {
        Scan::Lemma(lemma) => return lemma.to_string(),
        Scan::Miss {
            longest: Some(suffix),
            ..
        } => {
            let suffix = if suffix == GENITIVE && word.ends_with(PLURAL_GENITIVE) {
                PLURAL_GENITIVE
            } else {
                suffix
            };
            word = strip(word, Some(suffix));
            if let Some(lemma) = resources.lookup(Category::Pronoun, word) {
                return lemma.to_string();
            }
        }
        Scan::Miss { longest: None, .. } => {}
    }

    let determiner_matched = match stage(MarkerClass::Determiners).longest(word) {
        Scan::Lemma(lemma) => return lemma.to_string(),
        Scan::Miss { longest, matched } => {
            word = strip(word, longest);
            matched
        }
    };

    if determiner_matched {
        match stage(MarkerClass::Cases).longest(word) {
            Scan::Lemma(lemma) => return lemma.to_string(),
            Scan::Miss { longest, .. } => word = strip(word, longest),
        }
    }

    word.to_string()
}
