//! Suffix scanning shared by every pipeline
//!
//! A stage scans one suffix table against the tail of the working word. With
//! a lexicon attached, the first stripped stem found in it ends the whole
//! pipeline; otherwise the longest acceptable suffix is reported so the
//! caller can commit it.

use crate::category::Category;
use crate::data::tables::{Lexicon, SuffixTable};

/// Bangla virama (hasant), U+09CD
pub const VIRAMA: char = '\u{09CD}';

/// Which stems a stage may produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StemGuard {
    /// Any stem is acceptable
    Open,
    /// Stems ending in a virama are rejected without lookup
    Virama,
}

impl StemGuard {
    #[inline]
    pub fn accepts(&self, stem: &str) -> bool {
        match self {
            StemGuard::Open => true,
            StemGuard::Virama => !stem.ends_with(VIRAMA),
        }
    }
}

/// Outcome of a longest-match scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan<'r> {
    /// A stripped stem was found in the lexicon; this is its lemma
    Lemma(&'r str),
    /// No lexicon hit
    Miss {
        /// Longest suffix whose stem passed the guard
        longest: Option<&'r str>,
        /// Whether any suffix matched the tail at all, guard aside
        matched: bool,
    },
}

/// One configured stage: a table, a stem guard and an optional lexicon
#[derive(Debug, Clone, Copy)]
pub struct SuffixScan<'r> {
    table: &'r SuffixTable,
    guard: StemGuard,
    lexicon: Option<(&'r Lexicon, Category)>,
}

impl<'r> SuffixScan<'r> {
    pub fn new(table: &'r SuffixTable, guard: StemGuard) -> Self {
        Self {
            table,
            guard,
            lexicon: None,
        }
    }

    /// Short-circuit on stems found in this category's lexicon
    pub fn with_lexicon(mut self, lexicon: &'r Lexicon, category: Category) -> Self {
        self.lexicon = Some((lexicon, category));
        self
    }

    /// Scan every suffix, longest first.
    ///
    /// Returns the lemma of the first guarded stem found in the lexicon, or
    /// the longest guarded suffix when none is found.
    pub fn longest(&self, word: &str) -> Scan<'r> {
        let mut matched = false;
        let mut longest: Option<&'r str> = None;

        for suffix in self.table.iter() {
            let Some(stem) = word.strip_suffix(suffix) else {
                continue;
            };
            matched = true;

            if !self.guard.accepts(stem) {
                continue;
            }

            if let Some((lexicon, category)) = self.lexicon {
                if let Some(lemma) = lexicon.lookup(category, stem) {
                    return Scan::Lemma(lemma);
                }
            }

            let len = suffix.chars().count();
            if longest.map_or(true, |best| len > best.chars().count()) {
                longest = Some(suffix);
            }
        }

        Scan::Miss { longest, matched }
    }

    /// The first suffix in table order that matches, with its stem
    pub fn first<'w>(&self, word: &'w str) -> Option<(&'r str, &'w str)> {
        self.table.iter().find_map(|suffix| {
            word.strip_suffix(suffix)
                .filter(|stem| self.guard.accepts(stem))
                .map(|stem| (suffix, stem))
        })
    }
}

/// Remove a committed suffix, if any
#[inline]
pub fn strip<'w>(word: &'w str, suffix: Option<&str>) -> &'w str {
    suffix
        .and_then(|suffix| word.strip_suffix(suffix))
        .unwrap_or(word)
}
