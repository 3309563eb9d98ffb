//! Grammatical categories and tag routing
//!
//! [`Category`] is the closed set of pipelines the lemmatizer knows about.
//! Tagger output is routed into it with [`Category::from_tag`]; the word-level
//! API names its input class with a [`WordClass`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A grammatical category with its own lemmatization pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Nouns (`N*` tags)
    Noun,
    /// Pronouns (`PPR`)
    Pronoun,
    /// Adjectives (`J*` tags)
    Adjective,
    /// Verbs (`V*` tags)
    Verb,
    /// Adverbs (`R*` tags)
    Adverb,
    /// Postpositions (`PP`)
    Postposition,
    /// Everything else; passed through unchanged
    Unclassified,
}

impl Category {
    /// The six categories backed by a lexicon, in bundle order
    pub const LEXICAL: [Category; 6] = [
        Category::Noun,
        Category::Pronoun,
        Category::Adjective,
        Category::Verb,
        Category::Adverb,
        Category::Postposition,
    ];

    /// Route a tagger tag to a category.
    ///
    /// `PPR` and `PP` are matched whole; any other tag is classified by its
    /// leading character.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "PPR" => Category::Pronoun,
            "PP" => Category::Postposition,
            _ => match tag.chars().next() {
                Some('N') => Category::Noun,
                Some('V') => Category::Verb,
                Some('R') => Category::Adverb,
                Some('J') => Category::Adjective,
                _ => Category::Unclassified,
            },
        }
    }

    /// Short label appended as `word/LABEL` when annotating output
    pub fn tag_label(&self) -> &'static str {
        match self {
            Category::Noun => "NN",
            Category::Pronoun => "PRO",
            Category::Adjective => "ADJ",
            Category::Verb => "VRB",
            Category::Adverb => "ADV",
            Category::Postposition => "PP",
            Category::Unclassified => "O",
        }
    }

    /// Key of this category's lexicon in `dictionary.json`
    pub fn lexicon_key(&self) -> Option<&'static str> {
        match self {
            Category::Noun => Some("nouns"),
            Category::Pronoun => Some("pronouns"),
            Category::Adjective => Some("adjectives"),
            Category::Verb => Some("verbs"),
            Category::Adverb => Some("adverbs"),
            Category::Postposition => Some("postpositions"),
            Category::Unclassified => None,
        }
    }

    /// Slot of this category in per-category arrays
    pub(crate) fn index(&self) -> Option<usize> {
        match self {
            Category::Noun => Some(0),
            Category::Pronoun => Some(1),
            Category::Adjective => Some(2),
            Category::Verb => Some(3),
            Category::Adverb => Some(4),
            Category::Postposition => Some(5),
            Category::Unclassified => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Noun => "noun",
            Category::Pronoun => "pronoun",
            Category::Adjective => "adjective",
            Category::Verb => "verb",
            Category::Adverb => "adverb",
            Category::Postposition => "postposition",
            Category::Unclassified => "unclassified",
        };
        f.write_str(name)
    }
}

/// Part-of-speech names accepted by the word-level API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    Noun,
    Pronoun,
    Adjective,
    Verb,
    Adverb,
    Conjunction,
    Interjection,
    Postposition,
    Others,
    Part,
    Punctuation,
}

impl WordClass {
    /// All accepted classes, in their documented order
    pub const ALL: [WordClass; 11] = [
        WordClass::Noun,
        WordClass::Pronoun,
        WordClass::Adjective,
        WordClass::Verb,
        WordClass::Adverb,
        WordClass::Conjunction,
        WordClass::Interjection,
        WordClass::Postposition,
        WordClass::Others,
        WordClass::Part,
        WordClass::Punctuation,
    ];

    /// The name this class is spelled with
    pub fn as_str(&self) -> &'static str {
        match self {
            WordClass::Noun => "noun",
            WordClass::Pronoun => "pronoun",
            WordClass::Adjective => "adjective",
            WordClass::Verb => "verb",
            WordClass::Adverb => "adverb",
            WordClass::Conjunction => "conjunction",
            WordClass::Interjection => "interjection",
            WordClass::Postposition => "postposition",
            WordClass::Others => "others",
            WordClass::Part => "part",
            WordClass::Punctuation => "punctuation",
        }
    }

    /// The pipeline that handles this class
    pub fn category(&self) -> Category {
        match self {
            WordClass::Noun => Category::Noun,
            WordClass::Pronoun => Category::Pronoun,
            WordClass::Adjective => Category::Adjective,
            WordClass::Verb => Category::Verb,
            WordClass::Adverb => Category::Adverb,
            WordClass::Postposition => Category::Postposition,
            WordClass::Conjunction
            | WordClass::Interjection
            | WordClass::Others
            | WordClass::Part
            | WordClass::Punctuation => Category::Unclassified,
        }
    }
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no [`WordClass`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown part of speech '{0}'")]
pub struct UnknownWordClass(pub String);

impl FromStr for WordClass {
    type Err = UnknownWordClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WordClass::ALL
            .iter()
            .copied()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| UnknownWordClass(s.to_string()))
    }
}
