//! Verb pipeline

use super::scan::{strip, Scan, StemGuard, SuffixScan};
use crate::category::Category;
use crate::data::Resources;

/// Emphatic endings that attach only to verbs, checked in this order
const VERB_EMPHASIS: [&str; 3] = ["ই", "ও", "ঃ"];

/// Lemmatize a verb.
///
/// Drops one verb emphasis marker, then strips the longest inflection from
/// the verb rule table unless a shorter one yields a known stem first.
pub fn lemmatize_verb(resources: &Resources, word: &str) -> String {
    let word = word.trim();
    if let Some(lemma) = resources.lookup(Category::Verb, word) {
        return lemma.to_string();
    }

    let word = VERB_EMPHASIS
        .iter()
        .find_map(|marker| word.strip_suffix(*marker))
        .filter(|stem| StemGuard::Virama.accepts(stem))
        .unwrap_or(word);

    let rules = SuffixScan::new(resources.verb_rules(), StemGuard::Virama)
        .with_lexicon(resources.lexicon(), Category::Verb);

    match rules.longest(word) {
        Scan::Lemma(lemma) => lemma.to_string(),
        Scan::Miss { longest, .. } => strip(word, longest).to_string(),
    }
}
