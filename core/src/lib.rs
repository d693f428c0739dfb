//! In-memory tf-idf full-text search: an inverted index plus a query engine
//! with pagination, snippets and term suggestions.

pub mod engine;
pub mod index;
pub mod snippet;
pub mod tokenizer;

pub use engine::{EngineStats, HistoryEntry, QueryEngine, SearchHit, SearchResponse};
pub use index::{IndexConfig, IndexStats, Indexer, ScoredDoc, SharedIndexer};
