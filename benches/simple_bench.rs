use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sensitive::Filter;

/// Deterministic pseudo-words so repeated runs are comparable without
/// pulling in a `rand` dependency just for a benchmark.
fn synthetic_words(count: usize) -> Vec<String> {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
    (0..count)
        .map(|i| {
            let mut word = String::with_capacity(6);
            let mut n = i + 1;
            for _ in 0..6 {
                word.push(ALPHABET[n % ALPHABET.len()] as char);
                n /= ALPHABET.len();
            }
            word
        })
        .collect()
}

fn bench_find_all_scales_with_input_not_dictionary(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_all_vs_dictionary_size");

    for &dict_len in &[10usize, 100, 1_000, 10_000] {
        let filter = Filter::new();
        filter.load_many(synthetic_words(dict_len));

        let haystack = synthetic_words(2_000).join(" ");

        group.bench_with_input(BenchmarkId::from_parameter(dict_len), &dict_len, |b, _| {
            b.iter(|| black_box(filter.find_all(black_box(&haystack))));
        });
    }
    group.finish();
}

fn bench_redact(c: &mut Criterion) {
    let filter = Filter::new();
    filter.load_many(["bad", "f__k", "worse"]);
    let haystack = "this text is bad in more than one worse way, repeated ".repeat(200);

    c.bench_function("redact_long_text", |b| {
        b.iter(|| black_box(filter.redact(black_box(&haystack), '*')));
    });
}

criterion_group!(
    benches,
    bench_find_all_scales_with_input_not_dictionary,
    bench_redact
);
criterion_main!(benches);
