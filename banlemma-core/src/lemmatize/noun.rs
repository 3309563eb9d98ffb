//! Noun pipeline
//!
//! Markers are peeled outside-in: emphasis, case, determiner, plural. A case
//! marker can sit outside a determiner or a plural marker, so the case table
//! is scanned again after either of those matches.

use super::scan::{strip, Scan, StemGuard, SuffixScan};
use crate::category::Category;
use crate::data::tables::MarkerClass;
use crate::data::Resources;

/// Genitive case marker
const GENITIVE: &str = "ের";
/// Plural genitive, "of them"
const PLURAL_GENITIVE: &str = "দের";
/// Short possessive marker
const POSSESSIVE: &str = "র";
/// Conjunct ending in ra-phala; the trailing র is not a marker
const CONJUNCT_RA: &str = "্র";
/// Place-name ending; the trailing র is not a marker
const NAGAR: &str = "নগর";

/// Lemmatize a noun
pub fn lemmatize_noun(resources: &Resources, word: &str) -> String {
    let word = word.trim();
    if let Some(lemma) = resources.lookup(Category::Noun, word) {
        return lemma.to_string();
    }

    let stage = |class: MarkerClass| {
        SuffixScan::new(resources.suffixes(class), StemGuard::Virama)
            .with_lexicon(resources.lexicon(), Category::Noun)
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
            let corrected = strip(word, Some(case_exception(word, suffix)));
            word = if StemGuard::Virama.accepts(corrected) {
                corrected
            } else {
                strip(word, Some(suffix))
            };
            if let Some(lemma) = resources.lookup(Category::Noun, word) {
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

    let plural_matched = match stage(MarkerClass::Plurals).longest(word) {
        Scan::Lemma(lemma) => return lemma.to_string(),
        Scan::Miss { longest, matched } => {
            word = strip(word, longest);
            matched
        }
    };

    if plural_matched {
        // Final case strip, committed without consulting the lexicon
        let cases = SuffixScan::new(resources.suffixes(MarkerClass::Cases), StemGuard::Virama);
        if let Scan::Miss { longest, .. } = cases.longest(word) {
            word = strip(word, longest);
        }
    }

    word.to_string()
}

/// Correct the committed case suffix for endings the tables get wrong.
///
/// Returns the suffix to strip; an empty suffix strips nothing.
fn case_exception<'a>(word: &str, suffix: &'a str) -> &'a str {
    match suffix {
        GENITIVE if word.ends_with(PLURAL_GENITIVE) => PLURAL_GENITIVE,
        POSSESSIVE if word.ends_with(PLURAL_GENITIVE) => PLURAL_GENITIVE,
        POSSESSIVE if word.ends_with(CONJUNCT_RA) || word.ends_with(NAGAR) => "",
        _ => suffix,
    }
}
