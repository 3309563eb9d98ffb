//! Per-category lemmatization throughput
//!
//! Run with: cargo bench --bench lemmatizer_benchmarks

use banlemma_core::{data, lemmatize, Category};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

/// Inflected forms that exercise several stages of each pipeline
const WORDS: &[(Category, &[&str])] = &[
    (
        Category::Noun,
        &["পৃথিবীর", "বিলিয়নের", "ছেলেদের", "বইগুলোকে", "গাছটা", "রামনগর"],
    ),
    (Category::Pronoun, &["আমার", "আমাকেই", "তোমাদের"]),
    (Category::Adjective, &["ভালোই", "সুন্দরতম", "বড়তর"]),
    (Category::Verb, &["করেছিলাম", "বলল", "দেখছিই", "পড়বে"]),
    (Category::Adverb, &["আজই", "এখনও"]),
    (Category::Postposition, &["থেকেই", "জন্যই"]),
];

fn bench_categories(c: &mut Criterion) {
    let resources = data::embedded().unwrap();
    let mut group = c.benchmark_group("categories");

    for (category, words) in WORDS {
        group.throughput(Throughput::Elements(words.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("lemmatize", category),
            words,
            |b, words| {
                b.iter(|| {
                    for word in words.iter() {
                        black_box(lemmatize(&resources, *category, black_box(word)));
                    }
                });
            },
        );
    }

    group.finish();
}

/// Words that match no rule walk every stage of the noun pipeline
fn bench_unknown_nouns(c: &mut Criterion) {
    let resources = data::embedded().unwrap();
    let words: Vec<String> = (0..1000).map(|i| format!("শব্দ{i}")).collect();

    let mut group = c.benchmark_group("unknown_nouns");
    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("noun_fallback", |b| {
        b.iter(|| {
            for word in &words {
                black_box(lemmatize(&resources, Category::Noun, black_box(word)));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_categories, bench_unknown_nouns);
criterion_main!(benches);
