use crate::index::{IndexStats, SharedIndexer};
use crate::snippet::{make_snippet, DEFAULT_SNIPPET_LEN};
use serde::Serialize;
use std::collections::VecDeque;

/// Candidate cap handed to the raw index before pagination.
const CANDIDATE_LIMIT: usize = 100;

/// Page size used when the caller passes zero.
const DEFAULT_PAGE_SIZE: usize = 10;

/// Retained history entries. `total_searches` keeps counting past this cap.
const HISTORY_CAP: usize = 1000;

#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub doc_id: String,
    pub score: f64,
    pub snippet: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchHit>,
    pub total: usize,
    pub page: usize,
    pub pages: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub query: String,
    pub total_results: usize,
    pub page: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct EngineStats {
    pub index: IndexStats,
    pub total_searches: u64,
}

/// Pagination, snippets and prefix suggestions on top of a shared index.
///
/// Keeps a capped ring buffer of past queries; the raw scores stay inside
/// the index, scores here are rounded for presentation.
pub struct QueryEngine {
    index: SharedIndexer,
    history: VecDeque<HistoryEntry>,
    total_searches: u64,
}

impl QueryEngine {
    pub fn new(index: SharedIndexer) -> Self {
        Self { index, history: VecDeque::new(), total_searches: 0 }
    }

    /// Run a ranked query and slice out one page of results.
    ///
    /// `page` below 1 is clamped to 1 and a zero `page_size` falls back to
    /// the default; a page beyond the result set is an empty page, not an
    /// error. Every call lands in the history, hits or not.
    pub fn search(&mut self, query: &str, page: usize, page_size: usize) -> SearchResponse {
        let page = page.max(1);
        let page_size = if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size };

        let index = self.index.read();
        let ranked = index.search(query, CANDIDATE_LIMIT);
        let total = ranked.len();

        let start = (page - 1).saturating_mul(page_size).min(total);
        let end = start.saturating_add(page_size).min(total);

        let results: Vec<SearchHit> = ranked[start..end]
            .iter()
            .map(|hit| {
                let content = index.document(&hit.doc_id).unwrap_or_default();
                SearchHit {
                    doc_id: hit.doc_id.clone(),
                    score: round4(hit.score),
                    snippet: make_snippet(content, query, DEFAULT_SNIPPET_LEN),
                }
            })
            .collect();
        drop(index);

        self.record(HistoryEntry {
            query: query.to_string(),
            total_results: total,
            page,
        });
        tracing::debug!(query, total, page, "search served");

        SearchResponse {
            query: query.to_string(),
            results,
            total,
            page,
            pages: pages_for(total, page_size),
        }
    }

    /// Up to `max_suggestions` indexed terms starting with the lowercased
    /// prefix, in term-enumeration order.
    pub fn suggestions(&self, prefix: &str, max_suggestions: usize) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        let index = self.index.read();
        index
            .terms()
            .filter(|term| term.starts_with(&prefix))
            .take(max_suggestions)
            .map(str::to_string)
            .collect()
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            index: self.index.read().stats(),
            total_searches: self.total_searches,
        }
    }

    /// Retained history, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    fn record(&mut self, entry: HistoryEntry) {
        self.total_searches += 1;
        if self.history.len() == HISTORY_CAP {
            self.history.pop_front();
        }
        self.history.push_back(entry);
    }
}

fn round4(score: f64) -> f64 {
    (score * 10_000.0).round() / 10_000.0
}

fn pages_for(total: usize, page_size: usize) -> usize {
    ((total + page_size - 1) / page_size).max(1)
}
