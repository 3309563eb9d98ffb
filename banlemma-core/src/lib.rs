//! Rule-based lemmatization of Bangla words
//!
//! Each grammatical category has its own pipeline: a fixed sequence of
//! suffix-stripping stages over length-sorted marker tables, validated
//! against a per-category lexicon. A stem found in the lexicon ends the
//! pipeline immediately; otherwise the longest matching marker of each stage
//! is removed and the remainder is returned.
//!
//! # Architecture
//!
//! - [`data`]: the data bundle schema, its loader and the immutable runtime
//!   tables ([`Resources`])
//! - [`category`]: the closed set of pipelines and tagger tag routing
//! - [`lemmatize`]: the six pipelines and the shared suffix scan
//!
//! # Example
//!
//! ```rust
//! use banlemma_core::{lemmatize, Category};
//!
//! let resources = banlemma_core::data::embedded().unwrap();
//! assert_eq!(lemmatize(&resources, Category::Noun, "পৃথিবীর"), "পৃথিবী");
//! assert_eq!(lemmatize(&resources, Category::Unclassified, "।"), "।");
//! ```

pub mod category;
pub mod data;
pub mod error;
pub mod lemmatize;

pub use category::{Category, UnknownWordClass, WordClass};
pub use data::{DataBundle, Lexicon, MarkerClass, Resources, SuffixTable};
pub use error::{DataError, Result};
pub use lemmatize::lemmatize;
