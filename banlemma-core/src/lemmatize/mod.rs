//! Per-category lemmatization pipelines
//!
//! Every pipeline is a pure function of the shared [`Resources`] and a word.
//! None of them can fail: when no rule applies the word comes back as is.

pub mod adjective;
pub mod noun;
pub mod particle;
pub mod pronoun;
pub mod scan;
pub mod verb;

pub use adjective::lemmatize_adjective;
pub use noun::lemmatize_noun;
pub use particle::{lemmatize_adverb, lemmatize_postposition};
pub use pronoun::lemmatize_pronoun;
pub use verb::lemmatize_verb;

use crate::category::Category;
use crate::data::Resources;

/// Run the pipeline of `category` on a word.
///
/// Unclassified words are returned untouched.
pub fn lemmatize(resources: &Resources, category: Category, word: &str) -> String {
    let lemma = match category {
        Category::Noun => lemmatize_noun(resources, word),
        Category::Pronoun => lemmatize_pronoun(resources, word),
        Category::Adjective => lemmatize_adjective(resources, word),
        Category::Verb => lemmatize_verb(resources, word),
        Category::Adverb => lemmatize_adverb(resources, word),
        Category::Postposition => lemmatize_postposition(resources, word),
        Category::Unclassified => word.to_string(),
    };
    log::trace!("{category}: {word} -> {lemma}");
    lemma
}
