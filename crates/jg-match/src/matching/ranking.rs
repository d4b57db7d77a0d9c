use std::cmp::Ordering;

/// Order entries by descending score and keep at most `limit`. The sort is
/// stable, so equal scores keep their pool order. When a threshold applies,
/// entries scoring below it are dropped before the cut.
pub fn select_top<T>(
    mut entries: Vec<T>,
    threshold: Option<f64>,
    limit: usize,
    score_of: impl Fn(&T) -> f64,
) -> Vec<T> {
    if let Some(threshold) = threshold {
        entries.retain(|entry| score_of(entry) >= threshold);
    }

    entries.sort_by(|a, b| {
        score_of(b)
            .partial_cmp(&score_of(a))
            .unwrap_or(Ordering::Equal)
    });
    entries.truncate(limit);
    entries
}
