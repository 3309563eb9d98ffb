//! Lexicon and suffix data
//!
//! A data bundle is prepared offline and deserialized once; everything in
//! this module is read-only after construction.

pub mod bundle;
pub mod loader;
pub mod runtime;
pub mod tables;

pub use bundle::DataBundle;
pub use loader::{embedded, from_dir};
pub use runtime::Resources;
pub use tables::{Lexicon, MarkerClass, MarkerTables, SuffixTable};
