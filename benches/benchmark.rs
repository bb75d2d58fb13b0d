use criterion::{criterion_group, criterion_main, Criterion};

use corpus_vectorizer::{Corpus, TokenPolicy, Vectorizer};

/// tiny deterministic PRNG (xorshift32)
struct Rng(u32);
impl Rng {
    fn new(seed: u32) -> Self {
        Self(seed)
    }
    fn next_u32(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }
}

/// Synthetic corpus: `docs` documents of `words` words drawn from a
/// small vocabulary, deterministic across runs.
fn synthetic_corpus(docs: usize, words: usize) -> Corpus {
    let mut rng = Rng::new(0x1234_5678);
    let mut corpus = Corpus::new();
    for d in 0..docs {
        let mut text = String::new();
        for _ in 0..words {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&format!("w{}", rng.next_u32() % 2000));
        }
        corpus.add(format!("doc{}", d), text).expect("unique ids");
    }
    corpus
}

fn vectorize_benchmark(c: &mut Criterion) {
    let corpus = synthetic_corpus(200, 400);

    c.bench_function("fit_whitespace", |b| {
        let vectorizer: Vectorizer = Vectorizer::new(TokenPolicy::Whitespace);
        b.iter(|| vectorizer.fit(&corpus).expect("fit"));
    });

    c.bench_function("fit_whitespace_parallel", |b| {
        let vectorizer: Vectorizer =
            Vectorizer::new(TokenPolicy::Whitespace).with_parallel(true);
        b.iter(|| vectorizer.fit(&corpus).expect("fit"));
    });

    c.bench_function("fit_bigram", |b| {
        let vectorizer: Vectorizer =
            Vectorizer::new(TokenPolicy::Ngram { n: 2, n_min: 1 });
        b.iter(|| vectorizer.fit(&corpus).expect("fit"));
    });
}

criterion_group!(benches, vectorize_benchmark);
criterion_main!(benches);
