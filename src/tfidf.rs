//! TF-IDF vectorization over one corpus snapshot.
//!
//! One pass builds everything a recommendation request needs: per-document
//! term frequencies, corpus-wide document frequencies, and the shared
//! vocabulary the weight vectors are defined over. Nothing here outlives the
//! request; a new corpus snapshot means a new pass, and vectors from different
//! passes must never be compared.

use crate::document::Document;
use crate::tokenize::tokenize;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Sparse TF-IDF weight vector: a missing term means weight 0.
pub type WeightVector = HashMap<String, f64>;

/// Weight vectors for every document of one corpus snapshot, plus the shared
/// vocabulary and document-frequency statistics of that pass.
///
/// Vectors are stored in corpus order, so `vector(i)` belongs to the i-th
/// document passed to [`vectorize`]. The vocabulary is ordered; iterating it
/// fixes floating-point summation order, which keeps similarity scores
/// reproducible across runs.
#[derive(Debug, Clone, Default)]
pub struct TfidfModel {
    num_docs: usize,
    vocabulary: BTreeSet<String>,
    doc_frequency: HashMap<String, u32>,
    vectors: Vec<WeightVector>,
}

impl TfidfModel {
    /// Number of documents in the pass.
    pub fn num_docs(&self) -> usize {
        self.num_docs
    }

    /// Distinct tokens observed across the corpus, in sorted order.
    pub fn vocabulary(&self) -> &BTreeSet<String> {
        &self.vocabulary
    }

    /// Weight vector of the document at corpus position `idx`.
    pub fn vector(&self, idx: usize) -> Option<&WeightVector> {
        self.vectors.get(idx)
    }

    /// Number of documents containing `term` at least once.
    pub fn doc_frequency(&self, term: &str) -> u32 {
        self.doc_frequency.get(term).copied().unwrap_or(0)
    }

    /// Inverse document frequency: `ln(N / df)`, unsmoothed.
    ///
    /// Every vocabulary term has df ≥ 1, so the ratio is defined; a term in
    /// every document gets idf 0 and vanishes from all vectors. Terms outside
    /// the vocabulary return 0.
    pub fn idf(&self, term: &str) -> f64 {
        let df = self.doc_frequency(term);
        if df == 0 {
            return 0.0;
        }
        (self.num_docs as f64 / f64::from(df)).ln()
    }
}

/// Vectorize a corpus: one TF-IDF weight vector per document over a shared
/// vocabulary.
///
/// Term frequency is the raw count divided by the document's token count (an
/// empty token sequence yields an empty map, no division by zero). Document
/// frequency counts each document at most once per term, via its distinct
/// token set. Weights are `tf × idf`; zero weights are not stored.
pub fn vectorize(documents: &[Document]) -> TfidfModel {
    let token_seqs: Vec<Vec<String>> = documents
        .iter()
        .map(|doc| tokenize(&doc.composed_text()))
        .collect();

    // Per-document normalized term frequencies.
    let term_freqs: Vec<HashMap<String, f64>> = token_seqs
        .iter()
        .map(|tokens| {
            if tokens.is_empty() {
                return HashMap::new();
            }
            let len = tokens.len() as f64;
            let mut counts: HashMap<String, f64> = HashMap::new();
            for token in tokens {
                *counts.entry(token.clone()).or_insert(0.0) += 1.0;
            }
            counts.values_mut().for_each(|c| *c /= len);
            counts
        })
        .collect();

    // Corpus-wide document frequencies, each document counted once per term.
    let mut doc_frequency: HashMap<String, u32> = HashMap::new();
    for tokens in &token_seqs {
        let distinct: HashSet<&String> = tokens.iter().collect();
        for token in distinct {
            *doc_frequency.entry(token.clone()).or_insert(0) += 1;
        }
    }
    let vocabulary: BTreeSet<String> = doc_frequency.keys().cloned().collect();

    let num_docs = documents.len();
    let vectors: Vec<WeightVector> = term_freqs
        .iter()
        .map(|tf| {
            let mut vector = WeightVector::new();
            for (term, &freq) in tf {
                let df = doc_frequency[term];
                let idf = (num_docs as f64 / f64::from(df)).ln();
                if idf == 0.0 {
                    continue;
                }
                vector.insert(term.clone(), freq * idf);
            }
            vector
        })
        .collect();

    TfidfModel {
        num_docs,
        vocabulary,
        doc_frequency,
        vectors,
    }
}
