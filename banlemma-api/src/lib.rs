//! Public API for Bangla lemmatization
//!
//! [`Lemmatizer`] ties the lemmatization tables to a part-of-speech
//! [`Tagger`]. The sentence API tags the text and lemmatizes every token
//! with its category's pipeline; the word API skips the tagger when the
//! caller already knows the part of speech.
//!
//! ```rust
//! use banlemma_api::Lemmatizer;
//!
//! let lemmatizer = Lemmatizer::new().unwrap();
//! assert_eq!(lemmatizer.lemmatize_word("পৃথিবীর", "noun").unwrap(), "পৃথিবী");
//! assert_eq!(
//!     lemmatizer.lemmatize("পৃথিবীর/NC কথা/NC", true).unwrap(),
//!     "পৃথিবী/NN কথা/NN"
//! );
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
pub mod tagger;

use dto::render_tokens;
use error::Result;
use std::sync::Arc;

// Re-export key types
pub use banlemma_core::{Category, Resources, WordClass};
pub use config::{Config, ConfigBuilder, DataSource};
pub use dto::{Input, LemmaToken, Metadata, Output};
pub use error::ApiError;
pub use tagger::{PreTagged, TaggedWord, Tagger, TaggerError};

/// Main entry point for lemmatization
///
/// Cheap to clone; the tables and the tagger are shared.
#[derive(Clone)]
pub struct Lemmatizer {
    resources: Arc<Resources>,
    tagger: Arc<dyn Tagger>,
    config: Config,
}

impl std::fmt::Debug for Lemmatizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lemmatizer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Lemmatizer {
    /// Create a lemmatizer over the embedded bundle, reading pre-tagged text
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a lemmatizer with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let resources = config.data.load()?;
        log::debug!("lemmatizer created from {:?}", config.data);

        Ok(Self {
            resources,
            tagger: Arc::new(PreTagged::new(config.tag_separator)),
            config,
        })
    }

    /// Create a lemmatizer from already loaded tables
    pub fn from_resources(resources: Arc<Resources>) -> Self {
        Self {
            resources,
            tagger: Arc::new(PreTagged::default()),
            config: Config::default(),
        }
    }

    /// Replace the tagger used by the sentence API
    pub fn with_tagger<T: Tagger + 'static>(mut self, tagger: T) -> Self {
        self.tagger = Arc::new(tagger);
        self
    }

    /// Tag `text` and lemmatize every token
    pub fn analyze(&self, text: &str) -> Result<Vec<LemmaToken>> {
        let tagged = self
            .tagger
            .tag(text)
            .map_err(|e| ApiError::Tagger(e.to_string()))?;

        Ok(tagged
            .into_iter()
            .map(|TaggedWord { word, tag }| {
                let category = Category::from_tag(&tag);
                let lemma = banlemma_core::lemmatize(&self.resources, category, &word);
                log::trace!("{word}/{tag} -> {category}: {lemma}");
                LemmaToken {
                    word,
                    tag,
                    category,
                    lemma,
                }
            })
            .collect())
    }

    /// Lemmatize a sentence.
    ///
    /// Lemmas are joined with single spaces. With `with_pos` each one is
    /// followed by its category label, e.g. `পৃথিবী/NN`.
    pub fn lemmatize(&self, text: &str, with_pos: bool) -> Result<String> {
        Ok(render_tokens(&self.analyze(text)?, with_pos))
    }

    /// Lemmatize one word of a known part of speech.
    ///
    /// `pos` is one of the [`WordClass`] names. Classes without a pipeline
    /// return `word` exactly as given, surrounding whitespace included.
    pub fn lemmatize_word(&self, word: &str, pos: &str) -> Result<String> {
        let class: WordClass = pos
            .parse()
            .map_err(|_| ApiError::InvalidCategory { pos: pos.to_string() })?;

        let mut tokens = word.split_whitespace();
        let token = match (tokens.next(), tokens.count()) {
            (None, _) => return Err(ApiError::EmptyInput),
            (Some(token), 0) => token,
            (Some(_), rest) => return Err(ApiError::MultiWordInput { count: rest + 1 }),
        };

        match class.category() {
            Category::Unclassified => Ok(word.to_string()),
            category => Ok(banlemma_core::lemmatize(&self.resources, category, token)),
        }
    }

    /// Process input and return rendered text, tokens and metadata
    pub fn process(&self, input: Input) -> Result<Output> {
        let start = std::time::Instant::now();

        let text = input.read_text()?;
        let tokens = self.analyze(&text)?;
        let rendered = render_tokens(&tokens, self.config.with_pos);

        let metadata = Metadata {
            token_count: tokens.len(),
            unclassified_count: tokens
                .iter()
                .filter(|token| token.category == Category::Unclassified)
                .count(),
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        Ok(Output {
            text: rendered,
            tokens,
            metadata,
        })
    }

    /// Process text directly (convenience method)
    pub fn process_text(&self, text: &str) -> Result<Output> {
        self.process(Input::from_text(text))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The loaded tables
    pub fn resources(&self) -> &Resources {
        &self.resources
    }
}

// Convenience functions

/// Lemmatize pre-tagged text with the embedded bundle
pub fn lemmatize(text: &str, with_pos: bool) -> Result<String> {
    Lemmatizer::new()?.lemmatize(text, with_pos)
}

/// Lemmatize one word with the embedded bundle
pub fn lemmatize_word(word: &str, pos: &str) -> Result<String> {
    Lemmatizer::new()?.lemmatize_word(word, pos)
}
