//! Criterion benchmarks for folio.
//!
//! Covers the cleaning pipeline (single document and parallel batches),
//! frequency ranking, corpus construction and line histograms.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use folio::analysis::tokenizer::regex::RegexTokenizer;
use folio::cleaner::TextCleaner;
use folio::config::CleanConfig;
use folio::corpus::Corpus;
use folio::frequency::{FrequencyTable, top_k};
use folio::inspect::{Histogram, LINE_LENGTH_EDGES, line_token_counts};
use std::hint::black_box;

/// Generate play-like documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = [
        "Troy", "walls", "Hector", "battle", "cruel", "varlet", "unarm", "sweet", "Pandarus",
        "Greeks", "the", "of", "and", "thou", "hath", "lords", "armies", "fields", "swords",
        "women", "children", "glasses", "boxes", "churches", "stories", "53", "don't",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let line_count = 10 + (i % 20);
        let mut lines = Vec::with_capacity(line_count);
        for l in 0..line_count {
            if l % 7 == 0 {
                lines.push("HECTOR.".to_string());
                continue;
            }
            let line_length = 4 + ((i + l) % 9);
            let line: Vec<&str> = (0..line_length)
                .map(|j| words[(i * 7 + l * 11 + j * 13) % words.len()]) // Pseudo-random distribution
                .collect();
            lines.push(line.join(" "));
        }
        documents.push(lines.join("\n"));
    }

    documents
}

fn play_config() -> CleanConfig {
    CleanConfig {
        strip_stage_directions: true,
        ..Default::default()
    }
}

/// Benchmark the cleaning pipeline.
fn bench_cleaning(c: &mut Criterion) {
    let mut group = c.benchmark_group("cleaning");

    let cleaner = TextCleaner::new(play_config()).unwrap();
    let texts = generate_test_documents(1000);

    group.bench_function("clean_single_document", |b| {
        b.iter(|| {
            let result = cleaner.clean(black_box(texts[0].as_str()));
            black_box(result)
        })
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("clean_batch_sequential", |b| {
        b.iter(|| {
            for text in texts.iter().take(100) {
                let result = cleaner.clean(black_box(text.as_str()));
                let _ = black_box(result);
            }
        })
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("clean_batch_parallel", |b| {
        b.iter(|| {
            let result = cleaner.clean_all(black_box(&texts[..100]));
            black_box(result)
        })
    });

    group.finish();
}

/// Benchmark frequency ranking.
fn bench_frequency(c: &mut Criterion) {
    let mut group = c.benchmark_group("frequency");

    let cleaner = TextCleaner::new(play_config()).unwrap();
    let tokens: Vec<String> = generate_test_documents(200)
        .iter()
        .flat_map(|text| cleaner.clean(text).unwrap())
        .collect();

    group.throughput(Throughput::Elements(tokens.len() as u64));
    group.bench_function("top_k_20", |b| {
        b.iter(|| black_box(top_k(black_box(tokens.as_slice()), 20)))
    });

    group.bench_function("frequency_table_build", |b| {
        b.iter(|| black_box(FrequencyTable::from_tokens(black_box(&tokens))))
    });

    group.finish();
}

/// Benchmark corpus construction.
fn bench_corpus(c: &mut Criterion) {
    let mut group = c.benchmark_group("corpus");
    group.sample_size(20); // Reduce sample size for larger inputs

    let cleaner = TextCleaner::new(play_config()).unwrap();

    for size in [100, 500].iter() {
        let documents = cleaner.clean_all(&generate_test_documents(*size)).unwrap();

        group.bench_with_input(format!("build_{size}_documents"), size, |b, _| {
            b.iter(|| black_box(Corpus::from_documents(black_box(documents.as_slice()))))
        });
    }

    group.finish();
}

/// Benchmark per-line counts and histogram binning.
fn bench_line_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_histogram");

    let tokenizer = RegexTokenizer::new().unwrap();
    let text = generate_test_documents(100).join("\n");

    group.bench_function("line_token_counts", |b| {
        b.iter(|| black_box(line_token_counts(black_box(text.as_str()), &tokenizer)))
    });

    let counts = line_token_counts(&text, &tokenizer).unwrap();
    group.bench_function("histogram_from_values", |b| {
        b.iter(|| black_box(Histogram::from_values(black_box(counts.as_slice()), LINE_LENGTH_EDGES)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_cleaning,
    bench_frequency,
    bench_corpus,
    bench_line_histogram
);
criterion_main!(benches);
