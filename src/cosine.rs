//! Cosine similarity between weight vectors of one vectorization pass.

use crate::tfidf::WeightVector;
use std::collections::BTreeSet;

/// Cosine similarity of two weight vectors over their shared vocabulary.
///
/// Both vectors must come from the same [`vectorize`](crate::tfidf::vectorize)
/// pass. The vocabulary is iterated in its sorted order so the summation order
/// (and therefore the float result) is the same on every call. If either norm
/// is exactly zero the similarity is defined as 0 rather than a division
/// error; otherwise the result lands in `[0, 1]` (weights are non-negative),
/// clamped to absorb rounding just above 1 for identical vectors.
pub fn cosine_similarity(a: &WeightVector, b: &WeightVector, vocabulary: &BTreeSet<String>) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for term in vocabulary {
        let wa = a.get(term).copied().unwrap_or(0.0);
        let wb = b.get(term).copied().unwrap_or(0.0);
        dot += wa * wb;
        norm_a += wa * wa;
        norm_b += wb * wb;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 1.0)
}
