pub mod ranking;

pub use ranking::{CategoryTagScorer, ScoreDetails, Scorer};

use crate::document::Document;

/// Default number of related documents returned.
pub const DEFAULT_LIMIT: usize = 3;

/// Rank `documents` by relevance to the one at `reference_slug` and
/// return the top `limit`, using the default category/tag scorer.
pub fn rank_related(documents: &[Document], reference_slug: &str, limit: usize) -> Vec<Document> {
    rank_related_with(&CategoryTagScorer, documents, reference_slug, limit)
}

/// Rank with a caller-supplied scorer.
///
/// The reference document is never a candidate. The sort is stable, so
/// equal scores keep the caller's ordering — pass documents newest-first
/// and ties resolve by recency. If the reference slug is unknown the
/// result is empty: a safe no-op, not an error.
pub fn rank_related_with<S: Scorer>(
    scorer: &S,
    documents: &[Document],
    reference_slug: &str,
    limit: usize,
) -> Vec<Document> {
    let Some(reference) = documents.iter().find(|d| d.slug == reference_slug) else {
        return Vec::new();
    };

    let mut candidates: Vec<(usize, &Document)> = documents
        .iter()
        .filter(|d| d.slug != reference_slug)
        .map(|d| (scorer.score(d, reference).value(), d))
        .collect();

    // Descending score; stable for ties.
    candidates.sort_by(|a, b| b.0.cmp(&a.0));

    debug_assert!(candidates.windows(2).all(|w| w[0].0 >= w[1].0));

    candidates
        .into_iter()
        .take(limit)
        .map(|(_, d)| d.clone())
        .collect()
}
