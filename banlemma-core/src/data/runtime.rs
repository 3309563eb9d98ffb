//! Runtime lemmatization resources
//!
//! Bridges a deserialized [`DataBundle`] and the tables the pipelines read on
//! the hot path.

use crate::category::Category;
use crate::data::bundle::{DataBundle, VERB_RULES_KEY};
use crate::data::tables::{Lexicon, MarkerClass, MarkerTables, SuffixTable};
use crate::error::{DataError, Result};
use std::sync::Arc;

/// Immutable lexicon and suffix tables shared by all pipelines
#[derive(Debug, Clone)]
pub struct Resources {
    lexicon: Lexicon,
    markers: MarkerTables,
    verb_rules: SuffixTable,
}

impl Resources {
    /// Build runtime tables from a bundle
    pub fn from_bundle(bundle: &DataBundle) -> Result<Self> {
        bundle.validate()?;

        let lexicon = Lexicon::from_dictionary(&bundle.dictionary)?;
        let markers = MarkerTables::from_map(&bundle.markers)?;
        let verb_rules = bundle
            .suffixes
            .get(VERB_RULES_KEY)
            .ok_or(DataError::MissingVerbRules)
            .and_then(|list| SuffixTable::new(VERB_RULES_KEY, list.clone()))?;

        log::debug!(
            "built lemmatizer resources: {} nouns, {} verbs, {} verb rules",
            lexicon.len(Category::Noun),
            lexicon.len(Category::Verb),
            verb_rules.len()
        );

        Ok(Self {
            lexicon,
            markers,
            verb_rules,
        })
    }

    /// The process-wide instance built from the embedded bundle
    pub fn embedded() -> Result<Arc<Self>> {
        crate::data::loader::embedded()
    }

    /// The per-category lexicon
    #[inline]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Look up the lemma of an exact surface form
    #[inline]
    pub fn lookup(&self, category: Category, word: &str) -> Option<&str> {
        self.lexicon.lookup(category, word)
    }

    /// The suffix table of a marker class
    #[inline]
    pub fn suffixes(&self, class: MarkerClass) -> &SuffixTable {
        self.markers.suffixes(class)
    }

    /// The verb inflection rules, longest first
    #[inline]
    pub fn verb_rules(&self) -> &SuffixTable {
        &self.verb_rules
    }
}
