//! Top-k related-article selection.

use crate::cosine::cosine_similarity;
use crate::document::{Document, ScoredCandidate};
use crate::tfidf::vectorize;

/// Default number of related articles shown next to a post.
pub const DEFAULT_TOP_K: usize = 3;

/// Rank every other document against `query_id` and keep the top `k`.
///
/// The corpus is an explicit argument; each call vectorizes it from scratch
/// and shares no state with other calls, so concurrent invocations are safe.
/// Two inputs are expected, non-exceptional "no recommendations" conditions
/// and yield an empty list rather than an error:
/// - a corpus with fewer than 2 documents
/// - a `query_id` not present in the corpus
///
/// Results are sorted by similarity descending; equal scores keep corpus
/// order (stable sort). The query document itself is never a candidate.
pub fn recommend(corpus: &[Document], query_id: &str, k: usize) -> Vec<ScoredCandidate> {
    if corpus.len() < 2 {
        return Vec::new();
    }
    let Some(query_idx) = corpus.iter().position(|doc| doc.id == query_id) else {
        return Vec::new();
    };

    let model = vectorize(corpus);
    let query_vector = match model.vector(query_idx) {
        Some(v) => v,
        None => return Vec::new(),
    };

    let mut scored: Vec<ScoredCandidate> = Vec::with_capacity(corpus.len() - 1);
    for (idx, doc) in corpus.iter().enumerate() {
        if idx == query_idx {
            continue;
        }
        let Some(vector) = model.vector(idx) else {
            continue;
        };
        scored.push(ScoredCandidate {
            document: doc.clone(),
            similarity: cosine_similarity(query_vector, vector, model.vocabulary()),
        });
    }

    // Stable: similarity desc, ties keep corpus order.
    scored.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    scored.truncate(k);
    scored
}
