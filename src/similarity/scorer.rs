//! Swappable similarity scorers

use crate::similarity::fuzz;
use crate::similarity::types::SimilarityScores;

/// Scores a target string against a candidate string
///
/// Callers check `is_available` before scoring and degrade to empty results
/// when it returns false.
pub trait SimilarityScorer: Send + Sync {
    /// Whether this scorer can produce meaningful scores
    fn is_available(&self) -> bool {
        true
    }

    /// Score two strings; comparison is case-insensitive
    fn score(&self, target: &str, candidate: &str) -> SimilarityScores;
}

/// Built-in fuzzy scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyScorer;

impl FuzzyScorer {
    pub fn new() -> Self {
        Self
    }
}

impl SimilarityScorer for FuzzyScorer {
    fn score(&self, target: &str, candidate: &str) -> SimilarityScores {
        let target = target.to_lowercase();
        let candidate = candidate.to_lowercase();

        SimilarityScores {
            ratio: fuzz::ratio(&target, &candidate),
            partial_ratio: fuzz::partial_ratio(&target, &candidate),
            token_sort_ratio: fuzz::token_sort_ratio(&target, &candidate),
            token_set_ratio: fuzz::token_set_ratio(&target, &candidate),
        }
    }
}

/// Scorer standing in for a missing fuzzy-matching capability
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableScorer;

impl SimilarityScorer for UnavailableScorer {
    fn is_available(&self) -> bool {
        false
    }

    fn score(&self, _target: &str, _candidate: &str) -> SimilarityScores {
        SimilarityScores::default()
    }
}
