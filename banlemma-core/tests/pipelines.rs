//! Stage-by-stage tests of the six category pipelines
//!
//! Uses a small hand-built bundle so every table and lexicon entry that a
//! test depends on is visible here.

use banlemma_core::lemmatize::{
    lemmatize_adjective, lemmatize_adverb, lemmatize_noun, lemmatize_postposition,
    lemmatize_pronoun, lemmatize_verb,
};
use banlemma_core::{lemmatize, Category, DataBundle, Resources};

const DICTIONARY: &str = r#"{
    "nouns": {
        "বই": "বই",
        "ছেলে": "ছেলে",
        "পৃথিবী": "পৃথিবী",
        "বিলিয়ন": "বিলিয়ন",
        "শিক্ষক": "শিক্ষক",
        "গাছ": "গাছ",
        "মানুষ": "মানুষ",
        "কদে": "কদে"
    },
    "pronouns": {
        "আমি": "আমি",
        "আমার": "আমি",
        "এ": "এ"
    },
    "adjectives": {
        "ভালো": "ভালো"
    },
    "verbs": {
        "কর": "করা",
        "বল": "বলা",
        "দেখ": "দেখা"
    },
    "adverbs": {
        "আজ": "আজ"
    },
    "postpositions": {
        "থেকে": "থেকে"
    }
}"#;

const MARKERS: &str = r#"{
    "emphasis": ["টাই", "ই", "ও"],
    "cases": ["দের", "কে", "তে", "ের", "র", "ে"],
    "determiners": ["টুকু", "টা", "টি"],
    "plurals": ["গুলো", "েরা", "রা"],
    "degree": ["তম", "তর"]
}"#;

const SUFFIXES: &str = r#"{
    "verbs": ["েছিলাম", "েছিল", "ছিলাম", "েছে", "ছি", "ছে", "বে", "ল", "ে"]
}"#;

fn resources() -> Resources {
    resources_with_markers(MARKERS)
}

fn resources_with_markers(markers: &str) -> Resources {
    let bundle = DataBundle::from_json_strs(DICTIONARY, markers, SUFFIXES).unwrap();
    Resources::from_bundle(&bundle).unwrap()
}

/// Case table without the plural genitive, so the lexical exceptions decide
const MARKERS_WITHOUT_PLURAL_GENITIVE: &str = r#"{
    "emphasis": ["ই", "ও"],
    "cases": ["কে", "ের", "র"],
    "determiners": ["টা", "টি"],
    "plurals": ["গুলো", "রা"],
    "degree": ["তম", "তর"]
}"#;

mod noun {
    use super::*;

    #[test]
    fn test_exact_lexicon_hit() {
        let res = resources();
        assert_eq!(lemmatize_noun(&res, "বই"), "বই");
    }

    #[test]
    fn test_case_marker() {
        let res = resources();
        assert_eq!(lemmatize_noun(&res, "পৃথিবীর"), "পৃথিবী");
        assert_eq!(lemmatize_noun(&res, "বিলিয়নের"), "বিলিয়ন");
        assert_eq!(lemmatize_noun(&res, "শিক্ষকদের"), "শিক্ষক");
    }

    #[test]
    fn test_emphasis_hit() {
        let res = resources();
        assert_eq!(lemmatize_noun(&res, "বইটাই"), "বই");
    }

    #[test]
    fn test_determiner_and_plural() {
        let res = resources();
        assert_eq!(lemmatize_noun(&res, "গাছটা"), "গাছ");
        assert_eq!(lemmatize_noun(&res, "গাছগুলো"), "গাছ");
        assert_eq!(lemmatize_noun(&res, "ছেলেরা"), "ছেলে");
    }

    #[test]
    fn test_case_then_plural() {
        // কে is committed without a hit, then the plural stem is found
        let res = resources();
        assert_eq!(lemmatize_noun(&res, "গাছগুলোকে"), "গাছ");
    }

    #[test]
    fn test_case_outside_determiner() {
        // The determiner is stripped first, exposing a case marker
        let res = resources();
        assert_eq!(lemmatize_noun(&res, "মানুষেরটা"), "মানুষ");
    }

    #[test]
    fn test_final_case_strip_ignores_lexicon() {
        // After the plural রা goes, the longest case marker দের is committed
        // even though stripping র would give the known stem কদে
        let res = resources();
        assert_eq!(lemmatize_noun(&res, "কদেররা"), "ক");
    }

    #[test]
    fn test_virama_guard() {
        let res = resources();
        assert_eq!(lemmatize_noun(&res, "মন্ত্র"), "মন্ত্র");
    }

    #[test]
    fn test_plural_genitive_override_keeps_virama_free_stem() {
        let res = resources();
        // দের would leave আনন্, so the plain genitive is stripped instead
        assert_eq!(lemmatize_noun(&res, "আনন্দের"), "আনন্দ");
    }

    #[test]
    fn test_place_name_keeps_final_ra() {
        let res = resources();
        assert_eq!(lemmatize_noun(&res, "রামনগর"), "রামনগর");
    }

    #[test]
    fn test_genitive_widened_to_plural_genitive() {
        let res = resources_with_markers(MARKERS_WITHOUT_PLURAL_GENITIVE);
        assert_eq!(lemmatize_noun(&res, "ছেলেদের"), "ছেলে");
    }

    #[test]
    fn test_fallback_commits_without_hit() {
        let res = resources();
        // Unknown stem: the longest case marker is still removed
        assert_eq!(lemmatize_noun(&res, "কলমের"), "কলম");
    }

    #[test]
    fn test_input_is_trimmed() {
        let res = resources();
        assert_eq!(lemmatize_noun(&res, " পৃথিবীর "), "পৃথিবী");
    }
}

mod pronoun {
    use super::*;

    #[test]
    fn test_lexicon_and_emphasis() {
        let res = resources();
        assert_eq!(lemmatize_pronoun(&res, "আমার"), "আমি");
        assert_eq!(lemmatize_pronoun(&res, "আমারই"), "আমি");
    }

    #[test]
    fn test_plural_genitive_exception() {
        let res = resources_with_markers(MARKERS_WITHOUT_PLURAL_GENITIVE);
        assert_eq!(lemmatize_pronoun(&res, "এদের"), "এ");
    }

    #[test]
    fn test_no_virama_guard() {
        let res = resources();
        assert_eq!(lemmatize_pronoun(&res, "মন্ত্র"), "মন্ত্");
    }

    #[test]
    fn test_no_plural_stage() {
        let res = resources();
        assert_eq!(lemmatize_pronoun(&res, "গাছগুলো"), "গাছগুলো");
    }
}

mod adjective {
    use super::*;

    #[test]
    fn test_emphasis_hit() {
        let res = resources();
        assert_eq!(lemmatize_adjective(&res, "ভালোই"), "ভালো");
    }

    #[test]
    fn test_degree() {
        let res = resources();
        assert_eq!(lemmatize_adjective(&res, "সুন্দরতম"), "সুন্দর");
        assert_eq!(lemmatize_adjective(&res, "বৃহত্তরই"), "বৃহত্");
    }

    #[test]
    fn test_single_emphasis_strip() {
        let res = resources();
        assert_eq!(lemmatize_adjective(&res, "ভালোওই"), "ভালোও");
    }
}

mod verb {
    use super::*;

    #[test]
    fn test_inflections() {
        let res = resources();
        assert_eq!(lemmatize_verb(&res, "করেছিলাম"), "করা");
        assert_eq!(lemmatize_verb(&res, "বলল"), "বলা");
        assert_eq!(lemmatize_verb(&res, "দেখছিই"), "দেখা");
    }

    #[test]
    fn test_longest_fallback() {
        let res = resources();
        assert_eq!(lemmatize_verb(&res, "খেলেছিলাম"), "খেল");
    }

    #[test]
    fn test_one_emphasis_marker() {
        let res = resources();
        assert_eq!(lemmatize_verb(&res, "আসওই"), "আসও");
    }

    #[test]
    fn test_virama_guard() {
        let res = resources();
        assert_eq!(lemmatize_verb(&res, "কল্ল"), "কল্ল");
    }

    #[test]
    fn test_emphasis_kept_before_virama() {
        let res = resources();
        assert_eq!(lemmatize_verb(&res, "কর্ই"), "কর্ই");
    }
}

mod particles {
    use super::*;

    #[test]
    fn test_adverb() {
        let res = resources();
        assert_eq!(lemmatize_adverb(&res, "আজই"), "আজ");
        assert_eq!(lemmatize_adverb(&res, "এখনও"), "এখন");
        assert_eq!(lemmatize_adverb(&res, "৮"), "৮");
    }

    #[test]
    fn test_postposition() {
        let res = resources();
        assert_eq!(lemmatize_postposition(&res, "থেকেই"), "থেকে");
        assert_eq!(lemmatize_postposition(&res, "থেকে"), "থেকে");
    }
}

#[test]
fn test_lexicon_priority_for_every_category() {
    let res = resources();
    let cases = [
        (Category::Noun, "পৃথিবী", "পৃথিবী"),
        (Category::Pronoun, "আমার", "আমি"),
        (Category::Adjective, "ভালো", "ভালো"),
        (Category::Verb, "কর", "করা"),
        (Category::Adverb, "আজ", "আজ"),
        (Category::Postposition, "থেকে", "থেকে"),
    ];
    for (category, word, lemma) in cases {
        assert_eq!(lemmatize(&res, category, word), lemma, "{category}");
    }
}

#[test]
fn test_identity_fallback_for_every_category() {
    let res = resources();
    for category in Category::LEXICAL {
        assert_eq!(lemmatize(&res, category, "xyz"), "xyz", "{category}");
    }
    assert_eq!(lemmatize(&res, Category::Unclassified, "xyz"), "xyz");
}
