use searchlite_core::{IndexConfig, Indexer};

fn corpus() -> Indexer {
    let mut idx = Indexer::new();
    idx.add_document("doc1", "the cat sat on the mat");
    idx.add_document("doc2", "the dog sat on the rug");
    idx
}

#[test]
fn rare_term_hits_only_its_document() {
    let idx = corpus();
    let hits = idx.search("cat", 10);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].doc_id, "doc1");
    assert!(hits[0].score > 0.0);
}

#[test]
fn term_in_every_document_scores_zero() {
    // df == total_docs, so idf = ln(1) = 0 and both scores are exactly 0.
    let idx = corpus();
    let hits = idx.search("sat", 10);
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].score, 0.0);
    assert_eq!(hits[1].score, 0.0);
}

#[test]
fn stopword_only_query_is_empty() {
    let idx = corpus();
    assert!(idx.search("the a an", 10).is_empty());
}

#[test]
fn unknown_terms_contribute_nothing() {
    let idx = corpus();
    assert!(idx.search("zebra", 10).is_empty());
    let hits = idx.search("zebra cat", 10);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].doc_id, "doc1");
}

#[test]
fn empty_query_is_empty() {
    let idx = corpus();
    assert!(idx.search("", 10).is_empty());
    assert!(idx.search("   ", 10).is_empty());
}

#[test]
fn stats_track_adds_lengths_and_terms() {
    let mut idx = Indexer::new();
    idx.add_document("a", "one two three");
    idx.add_document("b", "four five");
    let stats = idx.stats();
    assert_eq!(stats.total_docs, 2);
    assert_eq!(stats.unique_terms, 5);
    assert!((stats.avg_doc_length - 2.5).abs() < 1e-9);
}

#[test]
fn stats_on_an_empty_index_are_defined() {
    let idx = Indexer::new();
    let stats = idx.stats();
    assert_eq!(stats.total_docs, 0);
    assert_eq!(stats.unique_terms, 0);
    assert_eq!(stats.avg_doc_length, 0.0);
    assert!(idx.search("anything", 10).is_empty());
}

#[test]
fn empty_document_never_divides_by_zero() {
    let mut idx = Indexer::new();
    idx.add_document("empty", "");
    idx.add_document("full", "ocelot ocelot");
    assert_eq!(idx.stats().total_docs, 2);
    let hits = idx.search("ocelot", 10);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].doc_id, "full");
    assert!(hits[0].score.is_finite());
}

#[test]
fn scores_are_non_negative() {
    let mut idx = Indexer::new();
    idx.add_document("a", "alpha beta gamma");
    idx.add_document("b", "alpha beta");
    idx.add_document("c", "alpha");
    let hits = idx.search("alpha beta gamma", 10);
    assert_eq!(hits.len(), 3);
    for hit in hits {
        assert!(hit.score >= 0.0);
    }
}

#[test]
fn rarer_terms_rank_higher() {
    let mut idx = Indexer::new();
    idx.add_document("a", "shared rare");
    idx.add_document("b", "shared");
    idx.add_document("c", "shared");
    let hits = idx.search("shared rare", 10);
    assert_eq!(hits[0].doc_id, "a");
    assert!(hits[0].score > hits[1].score);
}

#[test]
fn repeated_query_terms_accumulate() {
    let mut idx = Indexer::new();
    idx.add_document("a", "kelp");
    idx.add_document("b", "coral");
    let once = idx.search("kelp", 10);
    let twice = idx.search("kelp kelp", 10);
    assert!((twice[0].score - 2.0 * once[0].score).abs() < 1e-12);
}

#[test]
fn results_truncate_to_max_results() {
    let mut idx = Indexer::new();
    for i in 0..10 {
        idx.add_document(format!("doc{i}"), "walrus");
    }
    idx.add_document("other", "penguin");
    assert_eq!(idx.search("walrus", 3).len(), 3);
    assert!(idx.search("walrus", 0).is_empty());
}

#[test]
fn equal_scores_order_by_doc_id() {
    let mut idx = Indexer::new();
    idx.add_document("b", "kiwi");
    idx.add_document("c", "kiwi");
    idx.add_document("a", "kiwi");
    let ids: Vec<String> = idx.search("kiwi", 10).into_iter().map(|h| h.doc_id).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn default_config_folds_case() {
    let mut idx = Indexer::new();
    idx.add_document("a", "Rust rust RUST");
    assert_eq!(idx.stats().unique_terms, 1);
    let hits = idx.search("rust", 10);
    assert_eq!(hits.len(), 1);
    let hits = idx.search("RUST", 10);
    assert_eq!(hits.len(), 1);
}

#[test]
fn case_sensitive_config_keeps_terms_distinct() {
    let mut idx = Indexer::with_config(IndexConfig { case_sensitive: true });
    idx.add_document("a", "Rust rust");
    assert_eq!(idx.stats().unique_terms, 2);
    assert_eq!(idx.search("Rust", 10).len(), 1);
    assert_eq!(idx.search("rust", 10).len(), 1);
}

#[test]
fn re_adding_a_document_replaces_its_postings() {
    let mut idx = Indexer::new();
    idx.add_document("a", "apple banana");
    idx.add_document("a", "cherry");
    assert!(idx.search("apple", 10).is_empty());
    assert_eq!(idx.search("cherry", 10).len(), 1);
    // total_docs counts add operations, not live documents
    assert_eq!(idx.stats().total_docs, 2);
}

#[test]
fn idf_never_increases_as_a_term_spreads() {
    let mut idx = Indexer::new();
    idx.add_document("a", "fern");
    idx.add_document("b", "moss");
    let before = idx.search("fern", 10)[0].score;
    idx.add_document("c", "fern");
    let after = idx.search("fern", 10)[0].score;
    assert!(after <= before);
}
