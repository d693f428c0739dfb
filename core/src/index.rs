use crate::tokenizer::{is_stopword, tokenize};
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Indexing options.
///
/// `case_sensitive: true` compares terms byte-for-byte, so words differing
/// only in letter case land in separate posting lists. The default folds
/// terms to lowercase at index and query time.
#[derive(Debug, Clone)]
pub struct IndexConfig {
    pub case_sensitive: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self { case_sensitive: false }
    }
}

#[derive(Debug, Clone)]
struct StoredDoc {
    content: String,
    /// Token count of the full content, stopwords included. Computed once
    /// at add time.
    token_count: usize,
}

/// A ranked hit from the raw index: document id plus accumulated tf-idf score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDoc {
    pub doc_id: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndexStats {
    pub total_docs: u64,
    pub unique_terms: usize,
    pub avg_doc_length: f64,
}

/// Shared handle for multi-reader access: writers take the lock exclusively
/// for a whole `add_document`, readers may overlap with each other.
pub type SharedIndexer = Arc<RwLock<Indexer>>;

/// In-memory inverted index with tf-idf scoring.
///
/// Owns the document store, posting lists and per-document token counts.
/// Every operation either succeeds or degrades to an empty result; nothing
/// here returns an error.
#[derive(Default)]
pub struct Indexer {
    config: IndexConfig,
    /// term -> doc id -> raw term frequency
    postings: HashMap<String, HashMap<String, u32>>,
    docs: HashMap<String, StoredDoc>,
    /// Counts add operations, not live documents; re-adding an id bumps it
    /// again.
    total_docs: u64,
}

impl Indexer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: IndexConfig) -> Self {
        Self { config, ..Self::default() }
    }

    pub fn into_shared(self) -> SharedIndexer {
        Arc::new(RwLock::new(self))
    }

    /// Add `content` under `doc_id`. Never fails; empty content indexes as a
    /// zero-length document. Re-adding an existing id replaces the stored
    /// content and that document's postings.
    pub fn add_document(&mut self, doc_id: impl Into<String>, content: impl Into<String>) {
        let doc_id = doc_id.into();
        let content = content.into();
        if self.docs.contains_key(&doc_id) {
            self.remove_postings(&doc_id);
        }
        self.total_docs += 1;

        let tokens = tokenize(&content);
        let token_count = tokens.len();
        for token in tokens {
            let term = self.fold(token);
            if is_stopword(&term) {
                continue;
            }
            *self
                .postings
                .entry(term)
                .or_default()
                .entry(doc_id.clone())
                .or_insert(0) += 1;
        }

        tracing::debug!(doc_id = %doc_id, token_count, "indexed document");
        self.docs.insert(doc_id, StoredDoc { content, token_count });
    }

    /// Rank documents for `query`, best first, truncated to `max_results`.
    ///
    /// Scores accumulate `tf * idf` per query token, where `tf` is the raw
    /// term frequency over the document's token count and
    /// `idf = ln(total_docs / df)`. A query left empty after stopword
    /// filtering yields no results. Equal scores order by ascending doc id
    /// so rankings are deterministic.
    pub fn search(&self, query: &str, max_results: usize) -> Vec<ScoredDoc> {
        let terms: Vec<String> = tokenize(query)
            .into_iter()
            .map(|t| self.fold(t))
            .filter(|t| !is_stopword(t))
            .collect();
        if terms.is_empty() || max_results == 0 {
            return Vec::new();
        }

        let mut scores: HashMap<&str, f64> = HashMap::new();
        for term in &terms {
            let Some(postings) = self.postings.get(term) else {
                continue;
            };
            let df = postings.len();
            if df == 0 {
                continue;
            }
            let idf = (self.total_docs as f64 / df as f64).ln();
            for (doc_id, term_freq) in postings {
                // a zero token count divides as 1
                let len = self
                    .docs
                    .get(doc_id)
                    .map(|d| d.token_count)
                    .unwrap_or(1)
                    .max(1);
                let tf = f64::from(*term_freq) / len as f64;
                *scores.entry(doc_id.as_str()).or_insert(0.0) += tf * idf;
            }
        }

        let mut ranked: Vec<ScoredDoc> = scores
            .into_iter()
            .map(|(doc_id, score)| ScoredDoc { doc_id: doc_id.to_string(), score })
            .collect();
        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.doc_id.cmp(&b.doc_id))
        });
        ranked.truncate(max_results);
        ranked
    }

    pub fn stats(&self) -> IndexStats {
        let total_len: usize = self.docs.values().map(|d| d.token_count).sum();
        IndexStats {
            total_docs: self.total_docs,
            unique_terms: self.postings.len(),
            avg_doc_length: total_len as f64 / self.total_docs.max(1) as f64,
        }
    }

    /// Stored content for snippet extraction.
    pub fn document(&self, doc_id: &str) -> Option<&str> {
        self.docs.get(doc_id).map(|d| d.content.as_str())
    }

    /// Indexed terms in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    fn fold(&self, token: String) -> String {
        if self.config.case_sensitive {
            token
        } else {
            token.to_lowercase()
        }
    }

    fn remove_postings(&mut self, doc_id: &str) {
        self.postings.retain(|_, docs| {
            docs.remove(doc_id);
            !docs.is_empty()
        });
    }
}
