use crate::document::Document;

/// Weight of an exact category match relative to a single shared tag.
const CATEGORY_WEIGHT: usize = 3;

/// Components of a candidate's relevance score before collapsing to a
/// single value. Kept separate so callers can explain a ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreDetails {
    pub category_match: bool,
    pub shared_tags: Vec<String>,
}

impl ScoreDetails {
    pub fn value(&self) -> usize {
        let category = if self.category_match {
            CATEGORY_WEIGHT
        } else {
            0
        };
        category + self.shared_tags.len()
    }
}

pub trait Scorer {
    fn score(&self, candidate: &Document, reference: &Document) -> ScoreDetails;
}

/// v0: greedy exact-match heuristic. +3 for a shared category, +1 per
/// shared tag. No fuzzy matching, stemming, or further weighting —
/// simplicity and determinism over recall quality.
#[derive(Debug, Default)]
pub struct CategoryTagScorer;

impl Scorer for CategoryTagScorer {
    fn score(&self, candidate: &Document, reference: &Document) -> ScoreDetails {
        ScoreDetails {
            category_match: candidate.category == reference.category,
            shared_tags: candidate
                .tags
                .iter()
                .filter(|tag| reference.tags.contains(tag))
                .cloned()
                .collect(),
        }
    }
}
