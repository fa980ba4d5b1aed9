//! Similarity Ranker — cosine scores against every corpus vector, then a
//! deterministic top-N cut.
//!
//! Ordering is score descending with ties broken by ascending corpus index.
//! The tie-break is explicit policy, never left to sort stability.

use crate::matching::vectorizer::SparseVector;
use crate::matching::MatchError;

/// Returns the top `min(top_n, corpus_size)` (index, score) pairs.
/// `top_n == 0` is a caller error.
pub fn rank(
    query: &SparseVector,
    corpus_vectors: &[SparseVector],
    top_n: usize,
) -> Result<Vec<(usize, f64)>, MatchError> {
    if top_n == 0 {
        return Err(MatchError::InvalidArgument(
            "top_n must be at least 1".to_string(),
        ));
    }

    let mut scored: Vec<(usize, f64)> = corpus_vectors
        .iter()
        .enumerate()
        .map(|(idx, vec)| (idx, query.dot(vec)))
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    scored.truncate(top_n.min(corpus_vectors.len()));

    Ok(scored)
}
