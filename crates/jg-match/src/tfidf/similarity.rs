use super::vector_space::VectorSpace;

/// Cosine similarity of two term vectors. All TF-IDF weights are
/// non-negative, so the result lies in [0, 1]; clamped against float drift.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        tracing::warn!(
            a_len = a.len(),
            b_len = b.len(),
            "term vector dimension mismatch; returning zero similarity"
        );
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Similarity of one query vector against every corpus vector, in pool
/// order. A degenerate space scores zero for every member.
pub fn score_corpus(space: &VectorSpace, query: &[f64]) -> Vec<f64> {
    if space.is_degenerate() {
        return vec![0.0; space.corpus().len()];
    }

    space
        .corpus()
        .iter()
        .map(|member| cosine_similarity(query, member))
        .collect()
}
