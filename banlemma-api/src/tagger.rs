//! Part-of-speech tagging boundary
//!
//! The lemmatizer does not tag text itself. A [`Tagger`] turns raw text into
//! `(word, tag)` pairs whose tags are routed with
//! [`Category::from_tag`](banlemma_core::Category::from_tag); its output is
//! taken as correct.

/// Boxed error returned by taggers
pub type TaggerError = Box<dyn std::error::Error + Send + Sync>;

/// One tagged token
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaggedWord {
    /// The surface form
    pub word: String,
    /// The tagger's tag, e.g. `NC` or `VM`; empty when untagged
    pub tag: String,
}

impl TaggedWord {
    /// Create a tagged token
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }
}

/// Something that assigns part-of-speech tags to text
pub trait Tagger: Send + Sync {
    /// Split `text` into words and tag each one
    fn tag(&self, text: &str) -> Result<Vec<TaggedWord>, TaggerError>;
}

impl<F> Tagger for F
where
    F: Fn(&str) -> Vec<TaggedWord> + Send + Sync,
{
    fn tag(&self, text: &str) -> Result<Vec<TaggedWord>, TaggerError> {
        Ok(self(text))
    }
}

/// Reads text that an external tagger has already annotated.
///
/// Tokens are separated by whitespace and carry their tag after the last
/// separator, as in `পৃথিবীর/NC`. A token without a separator, or with
/// nothing before it, gets an empty tag.
#[derive(Debug, Clone, Copy)]
pub struct PreTagged {
    separator: char,
}

/// Separator between word and tag in pre-tagged text
pub const DEFAULT_SEPARATOR: char = '/';

impl PreTagged {
    /// Parse tokens using `separator` between word and tag
    pub fn new(separator: char) -> Self {
        Self { separator }
    }

    fn parse_token<'t>(&self, token: &'t str) -> (&'t str, &'t str) {
        match token.rsplit_once(self.separator) {
            Some((word, tag)) if !word.is_empty() => (word, tag),
            _ => (token, ""),
        }
    }
}

impl Default for PreTagged {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

impl Tagger for PreTagged {
    fn tag(&self, text: &str) -> Result<Vec<TaggedWord>, TaggerError> {
        let tagged: Vec<_> = text
            .split_whitespace()
            .map(|token| {
                let (word, tag) = self.parse_token(token);
                TaggedWord::new(word, tag)
            })
            .collect();

        let untagged = count_untagged(&tagged);
        if untagged > 0 {
            log::warn!(
                "{untagged} of {} tokens have no '{}' tag and pass through unchanged",
                tagged.len(),
                self.separator
            );
        }

        Ok(tagged)
    }
}

/// Tokens whose tag is empty
fn count_untagged(tagged: &[TaggedWord]) -> usize {
    tagged.iter().filter(|word| word.tag.is_empty()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pre_tagged_tokens() {
        let tagged = PreTagged::default().tag("পৃথিবীর/NC ৮/RDF").unwrap();
        assert_eq!(
            tagged,
            vec![TaggedWord::new("পৃথিবীর", "NC"), TaggedWord::new("৮", "RDF")]
        );
    }

    #[test]
    fn test_split_on_last_separator() {
        let tagged = PreTagged::default().tag("১/২/NC").unwrap();
        assert_eq!(tagged, vec![TaggedWord::new("১/২", "NC")]);
    }

    #[test]
    fn test_missing_tag_is_empty() {
        let tagged = PreTagged::default().tag("কথা কথা/ /").unwrap();
        assert_eq!(
            tagged,
            vec![
                TaggedWord::new("কথা", ""),
                TaggedWord::new("কথা", ""),
                TaggedWord::new("/", ""),
            ]
        );
    }

    #[test]
    fn test_untagged_tokens_are_counted() {
        let raw = PreTagged::default().tag("পৃথিবীর জনসংখ্যা ৮").unwrap();
        assert_eq!(count_untagged(&raw), 3);

        let tagged = PreTagged::default().tag("পৃথিবীর/NC জনসংখ্যা ৮/RDF").unwrap();
        assert_eq!(count_untagged(&tagged), 1);
    }

    #[test]
    fn test_custom_separator() {
        let tagged = PreTagged::new('_').tag("বই_NC").unwrap();
        assert_eq!(tagged, vec![TaggedWord::new("বই", "NC")]);
    }

    #[test]
    fn test_closure_tagger() {
        let tagger = |text: &str| {
            text.split_whitespace()
                .map(|word| TaggedWord::new(word, "NC"))
                .collect::<Vec<_>>()
        };
        let tagged = tagger.tag("বই গাছ").unwrap();
        assert_eq!(tagged.len(), 2);
        assert!(tagged.iter().all(|t| t.tag == "NC"));
    }
}
