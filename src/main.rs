use std::{env, fs, time::Instant};

use corpus_vectorizer::vectorizer::rank;
use corpus_vectorizer::{
    Corpus, CorpusSource, Result, SampleCorpus, TfWeight, TokenPolicy, Vectorizer,
};

// ---- 簡易 CLI 引数処理 ----
// --input FILE     : TSV corpus, one "id<TAB>text" record per line
// --sample         : use the built-in sample corpus instead of a file
// --policy SPEC    : tokenization policy (default: word)
// --tf raw|relative: tf variant fed into tf-idf (default: relative)
// --top N          : terms reported per document (default: 10)
// --aggregate      : report corpus-wide column sums instead of per document
// --parallel       : tokenize documents in parallel
// 例)  corpus-vectorizer --input docs.tsv --policy ngram:2:1 --top 5

fn print_usage() {
    eprintln!("Usage: corpus-vectorizer [--input FILE | --sample] [--policy SPEC] [--tf raw|relative] [--top N] [--aggregate] [--parallel]");
    eprintln!("Policies: whitespace | regex:PAT | word | ngram:N[:MIN] | char | shingle:N[:MIN]");
    eprintln!("Output format: <doc_id>\t<term>\t<weight>");
}

fn load_corpus(input: Option<&str>, use_sample: bool) -> Result<Corpus> {
    if use_sample {
        return SampleCorpus.load();
    }
    match input {
        Some(path) => {
            let data = fs::read_to_string(path)?;
            Corpus::from_tsv_str(&data)
        }
        None => SampleCorpus.load(),
    }
}

fn main() {
    env_logger::init();
    let program_start = Instant::now();

    let mut args = env::args().skip(1);
    let mut input: Option<String> = None;
    let mut use_sample = false;
    let mut policy_spec = String::from("word");
    let mut tf_weight = TfWeight::RelativeFrequency;
    let mut top: usize = 10;
    let mut aggregate = false;
    let mut parallel = false;
    while let Some(a) = args.next() {
        match a.as_str() {
            "--input" => {
                if let Some(v) = args.next() { input = Some(v); } else { eprintln!("[error] --input requires a path"); return; }
            }
            "--sample" => { use_sample = true; }
            "--policy" => {
                if let Some(v) = args.next() { policy_spec = v; } else { eprintln!("[error] --policy requires a spec"); return; }
            }
            "--tf" => {
                match args.next().as_deref() {
                    Some("raw") => tf_weight = TfWeight::RawCount,
                    Some("relative") => tf_weight = TfWeight::RelativeFrequency,
                    _ => { eprintln!("[error] --tf needs raw or relative"); return; }
                }
            }
            "--top" => {
                if let Some(v) = args.next() { match v.parse::<usize>() { Ok(n) if n > 0 => top = n, _ => { eprintln!("[error] --top needs positive integer"); return; } } } else { eprintln!("[error] --top requires a number"); return; }
            }
            "--aggregate" => { aggregate = true; }
            "--parallel" => { parallel = true; }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("[warn] unknown arg ignored: {}", other);
            }
        }
    }

    if input.is_none() && !use_sample {
        eprintln!("[info] no --input given, falling back to the sample corpus");
    }

    // ---- corpus load ----
    let load_start = Instant::now();
    let corpus = match load_corpus(input.as_deref(), use_sample) {
        Ok(c) => c,
        Err(e) => { eprintln!("[error] failed to load corpus: {}", e); return; }
    };
    if corpus.is_empty() {
        eprintln!("[error] no documents loaded. abort");
        return;
    }
    eprintln!("[info] loaded {} documents", corpus.len());

    // ---- vectorize ----
    let policy = match TokenPolicy::parse(&policy_spec) {
        Ok(p) => p,
        Err(e) => { eprintln!("[error] {}", e); return; }
    };
    let vectorizer: Vectorizer = Vectorizer::new(policy)
        .with_tf_weight(tf_weight)
        .with_parallel(parallel);
    let fit_start = Instant::now();
    let result = match vectorizer.fit(&corpus) {
        Ok(r) => r,
        Err(e) => { eprintln!("[error] vectorization failed: {}", e); return; }
    };
    let fit_done = Instant::now();
    eprintln!(
        "[info] {} documents x {} terms",
        result.dtm.num_docs(),
        result.vocabulary.len()
    );
    eprintln!(
        "[time] load={:.2}ms fit={:.2}ms",
        fit_start.duration_since(load_start).as_secs_f64() * 1000.0,
        fit_done.duration_since(fit_start).as_secs_f64() * 1000.0
    );

    // ---- report ----
    if aggregate {
        let mut hits = rank::rank_aggregate_terms(&result.tfidf);
        hits.sort_by_weight();
        for (term, weight) in hits.top_k(top) {
            println!("corpus\t{}\t{:.6}", term, weight);
        }
    } else {
        for doc_id in result.dtm.doc_ids() {
            // doc ids come straight from the matrix, so the row exists
            let Some(mut hits) = rank::rank_document_terms(&result.tfidf, doc_id) else {
                continue;
            };
            hits.sort_by_weight();
            for (term, weight) in hits.top_k(top) {
                println!("{}\t{}\t{:.6}", doc_id, term, weight);
            }
        }
    }

    eprintln!(
        "[time] program_total={:.2}ms",
        program_start.elapsed().as_secs_f64() * 1000.0
    );
}
