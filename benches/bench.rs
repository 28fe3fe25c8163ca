//! Criterion benchmarks for the kotogram matcher.
//!
//! Covers single-sequence matching (with and without a star), whole-registry
//! matching with overlap resolution, and batch matching on a thread pool.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use kotogram::config::RegistryConfig;
use kotogram::grammar::notation::parse_sequence;
use kotogram::grammar::{Matcher, RuleRegistry};
use kotogram::morph::{InflectionForm, InflectionType, MorphToken, PartOfSpeech, PosDetail};
use kotogram::rules::builtin_rules;
use std::hint::black_box;

/// A sentence of `repeat` copies of "夏休みの間に3分おきに読みあがるから".
fn generate_sentence(repeat: usize) -> Vec<MorphToken> {
    let unit = vec![
        MorphToken::new("夏休み", PartOfSpeech::Noun).with_details(&[PosDetail::General]),
        MorphToken::new("の", PartOfSpeech::Particle).with_details(&[PosDetail::Adnominalizer]),
        MorphToken::new("間", PartOfSpeech::Noun).with_details(&[PosDetail::AdverbialNoun]),
        MorphToken::new("に", PartOfSpeech::Particle).with_details(&[PosDetail::CaseParticle]),
        MorphToken::new("3", PartOfSpeech::Noun).with_details(&[PosDetail::Numeral]),
        MorphToken::new("分", PartOfSpeech::Noun).with_details(&[PosDetail::Suffix, PosDetail::Counter]),
        MorphToken::new("おき", PartOfSpeech::Noun).with_details(&[PosDetail::Suffix]),
        MorphToken::new("に", PartOfSpeech::Particle).with_details(&[PosDetail::CaseParticle]),
        MorphToken::new("読み", PartOfSpeech::Verb)
            .with_lemma("読む")
            .with_inflection(InflectionType::GodanMa, InflectionForm::Continuative),
        MorphToken::new("あがる", PartOfSpeech::Verb)
            .with_inflection(InflectionType::GodanRa, InflectionForm::Basic),
        MorphToken::new("から", PartOfSpeech::Particle).with_details(&[PosDetail::ConjunctiveParticle]),
    ];
    unit.iter().cycle().take(unit.len() * repeat).cloned().collect()
}

fn builtin_registry(config: RegistryConfig) -> RuleRegistry {
    let mut registry = RuleRegistry::with_config(config).unwrap();
    registry.add_rules(builtin_rules().unwrap()).unwrap();
    registry
}

/// Benchmark sequence matching.
fn bench_sequence_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_matching");
    let matcher = Matcher::new();
    let tokens = generate_sentence(20);

    let plain = parse_sequence("名詞 の 間 に?").unwrap();
    group.throughput(Throughput::Elements(tokens.len() as u64));
    group.bench_function("plain_all_offsets", |b| {
        b.iter(|| {
            for start in 0..tokens.len() {
                black_box(matcher.match_sequence(&plain, black_box(&tokens), start));
            }
        })
    });

    // The star never finds its completion, so every offset scans to the end.
    let star = parse_sequence("名詞 ** にかけて").unwrap();
    group.bench_function("star_worst_case", |b| {
        b.iter(|| {
            for start in 0..tokens.len() {
                black_box(matcher.match_sequence(&star, black_box(&tokens), start));
            }
        })
    });

    group.finish();
}

/// Benchmark registry matching with overlap resolution.
fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");
    let registry = builtin_registry(RegistryConfig::default());
    let sentence = generate_sentence(5);

    group.throughput(Throughput::Elements(sentence.len() as u64));
    group.bench_function("match_all_builtin", |b| {
        b.iter(|| black_box(registry.match_all(black_box(&sentence))))
    });

    group.finish();
}

/// Benchmark batch matching, sequential and parallel.
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.sample_size(20);

    let sentences: Vec<Vec<MorphToken>> = (1..=100).map(|i| generate_sentence(1 + i % 4)).collect();
    let sequential = builtin_registry(RegistryConfig::default());
    let parallel = builtin_registry(RegistryConfig::default().with_parallel(true));

    group.throughput(Throughput::Elements(sentences.len() as u64));
    group.bench_function("sequential_match_batch", |b| {
        b.iter(|| black_box(sequential.match_batch(black_box(&sentences))))
    });
    group.bench_function("parallel_match_batch", |b| {
        b.iter(|| black_box(parallel.match_batch(black_box(&sentences))))
    });

    group.finish();
}

criterion_group!(benches, bench_sequence_matching, bench_registry, bench_batch);
criterion_main!(benches);
