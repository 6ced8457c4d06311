//! `relir`: content-based related-article ranking.
//!
//! This crate is the recommendation core of a college-news blog platform:
//! - `tokenize` normalizes article metadata into index terms.
//! - `tfidf` builds one TF-IDF weight vector per article over a shared vocabulary.
//! - `cosine` scores vector pairs by cosine similarity.
//! - `recommend` ranks every other article against the one being viewed and keeps the top-k.
//!
//! Scope:
//! - In-memory corpora, recomputed from scratch on every call
//! - Deterministic ranking (ordered vocabulary, stable tie-break by corpus order)
//! - Caller-provided corpus (the content store decides which articles are eligible)
//!
//! Non-goals:
//! - Persisting vectors or maintaining an incremental index (each call is
//!   O(corpus × vocabulary); fine for tens of articles, a ceiling beyond that)
//! - Learning-to-rank or per-reader personalization
//! - Storage, HTTP, and rendering (owned by the surrounding application)
//!
//! References:
//! - Spärck Jones (1972): term specificity / IDF motivation
//! - Salton & Buckley (1988): term-weighting approaches in automatic text retrieval

pub mod cosine;
pub mod document;
pub mod recommend;
pub mod tfidf;
pub mod tokenize;

pub use document::{Category, Document, ScoredCandidate};
pub use error::Error;
pub use recommend::{recommend, DEFAULT_TOP_K};

mod error {
    /// Errors for corpus ingestion.
    ///
    /// Ranking itself has no failure modes: a corpus too small to compare or an
    /// unknown query id yields an empty recommendation list, not an error.
    #[derive(thiserror::Error, Debug)]
    pub enum Error {
        /// Category string is not in the platform's closed category list.
        #[error("unknown category: {0}")]
        UnknownCategory(String),
        /// Two documents in one corpus share an id.
        #[error("duplicate document id: {0}")]
        DuplicateDocumentId(String),
    }
}
