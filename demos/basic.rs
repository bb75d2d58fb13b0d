use corpus_vectorizer::vectorizer::rank;
use corpus_vectorizer::{Corpus, TokenPolicy, Vectorizer};

fn main() {
    // build corpus
    let mut corpus = Corpus::new();
    corpus.add("doc1", "the cat sat on the mat").unwrap();
    corpus.add("doc2", "the dog sat on the log").unwrap();
    corpus.add("doc3", "a bird sang in the tree").unwrap();

    // run the pipeline
    let vectorizer: Vectorizer = Vectorizer::new(TokenPolicy::Word);
    let result = vectorizer.fit(&corpus).expect("vectorization failed");

    println!(
        "{} documents x {} terms",
        result.dtm.num_docs(),
        result.vocabulary.len()
    );

    // print top terms per document
    for doc_id in result.dtm.doc_ids() {
        let mut hits = rank::rank_document_terms(&result.tfidf, doc_id).unwrap();
        hits.sort_by_weight();
        println!("--- {doc_id}");
        for (term, weight) in hits.top_k(3) {
            println!("{weight:.6}\t{term}");
        }
    }

    // debug
    println!("{:?}", result.idf);
}
