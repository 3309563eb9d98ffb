//! Runtime tables for lemmatization
//!
//! All tables are immutable once built and allocation-free during lookup.

pub mod lexicon;
pub mod suffix;

pub use lexicon::Lexicon;
pub use suffix::{MarkerClass, MarkerTables, SuffixTable};
