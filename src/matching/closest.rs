//! Closest-match ranking of candidates against a failed target

use std::sync::Arc;

use tracing::{debug, warn};

use crate::matching::types::{MatchedField, RankedMatch};
use crate::similarity::{FuzzyScorer, SimilarityScorer, SimilarityThresholds};
use crate::types::Candidate;

/// Default number of matches returned
pub const DEFAULT_MATCH_LIMIT: usize = 10;

/// Default minimum similarity score for a match
pub const DEFAULT_MIN_SCORE: f64 = 50.0;

/// Ranks candidate fields by similarity to a target
#[derive(Clone)]
pub struct ClosestMatchFinder {
    scorer: Arc<dyn SimilarityScorer>,
    thresholds: SimilarityThresholds,
}

impl ClosestMatchFinder {
    /// Create finder with the built-in fuzzy scorer
    pub fn new() -> Self {
        Self::with_scorer(Arc::new(FuzzyScorer::new()), SimilarityThresholds::default())
    }

    /// Create finder with a custom scorer and thresholds
    pub fn with_scorer(scorer: Arc<dyn SimilarityScorer>, thresholds: SimilarityThresholds) -> Self {
        Self { scorer, thresholds }
    }

    /// Find up to `limit` candidate fields scoring at least `min_score`
    ///
    /// Each non-empty field (title, description, value) is scored on its own,
    /// so one candidate may appear more than once. Ties keep input order.
    pub fn find_closest(
        &self,
        target: &str,
        candidates: &[Candidate],
        limit: usize,
        min_score: f64,
    ) -> Vec<RankedMatch> {
        if !self.scorer.is_available() {
            warn!("similarity scorer unavailable, skipping closest-match search");
            return Vec::new();
        }
        if candidates.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut matches = Vec::new();

        for candidate in candidates {
            let fields = [
                (MatchedField::Title, candidate.title_text().map(str::to_string)),
                (MatchedField::Description, candidate.description_text().map(str::to_string)),
                (MatchedField::Value, candidate.value_text()),
            ];

            for (field, text) in fields {
                let Some(text) = text else { continue };

                let scores = self.scorer.score(target, &text);
                let best = scores.best();
                if best < min_score {
                    continue;
                }

                matches.push(RankedMatch {
                    candidate: candidate.clone(),
                    matched_text: text,
                    matched_field: field,
                    similarity_score: best,
                    scores,
                    similarity_category: self.thresholds.categorize(best),
                });
            }
        }

        // Stable sort keeps candidate order on ties
        matches.sort_by(|a, b| {
            b.similarity_score
                .partial_cmp(&a.similarity_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        matches.truncate(limit);

        debug!(target_text = target, found = matches.len(), "closest matches ranked");
        matches
    }
}

impl Default for ClosestMatchFinder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::{SimilarityCategory, SimilarityScores, UnavailableScorer};
    use std::collections::HashMap;

    /// Returns a fixed score per candidate text
    struct FixedScorer(HashMap<&'static str, f64>);

    impl SimilarityScorer for FixedScorer {
        fn score(&self, _target: &str, candidate: &str) -> SimilarityScores {
            let s = self.0.get(candidate).copied().unwrap_or(0.0);
            SimilarityScores {
                ratio: s,
                partial_ratio: s,
                token_sort_ratio: s,
                token_set_ratio: s,
            }
        }
    }

    fn fixed(scores: &[(&'static str, f64)]) -> ClosestMatchFinder {
        ClosestMatchFinder::with_scorer(
            Arc::new(FixedScorer(scores.iter().copied().collect())),
            SimilarityThresholds::default(),
        )
    }

    #[test]
    fn test_threshold_boundary() {
        let finder = fixed(&[("at", 50.0), ("below", 49.999)]);
        let candidates = vec![Candidate::titled("at"), Candidate::titled("below")];

        let matches = finder.find_closest("x", &candidates, DEFAULT_MATCH_LIMIT, DEFAULT_MIN_SCORE);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].matched_text, "at");
        assert_eq!(matches[0].similarity_category, SimilarityCategory::LowSimilarity);
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let finder = fixed(&[("a", 60.0), ("b", 90.0), ("c", 60.0)]);
        let candidates = vec![Candidate::titled("a"), Candidate::titled("b"), Candidate::titled("c")];

        let matches = finder.find_closest("x", &candidates, 10, 50.0);
        let texts: Vec<_> = matches.iter().map(|m| m.matched_text.as_str()).collect();
        assert_eq!(texts, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_candidate_can_match_on_several_fields() {
        let finder = fixed(&[("Save", 100.0), ("Save document", 80.0), ("7", 10.0)]);
        let candidates = vec![Candidate::titled("Save")
            .with_description("Save document")
            .with_value(7)];

        let matches = finder.find_closest("save", &candidates, 10, 50.0);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].matched_field, MatchedField::Title);
        assert_eq!(matches[1].matched_field, MatchedField::Description);
    }

    #[test]
    fn test_limit_applies() {
        let finder = fixed(&[("a", 90.0), ("b", 80.0), ("c", 70.0)]);
        let candidates = vec![Candidate::titled("a"), Candidate::titled("b"), Candidate::titled("c")];

        let matches = finder.find_closest("x", &candidates, 2, 50.0);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[1].matched_text, "b");
    }

    #[test]
    fn test_value_field_is_stringified() {
        let finder = ClosestMatchFinder::new();
        let candidates = vec![Candidate::default().with_value(12345)];

        let matches = finder.find_closest("12345", &candidates, 10, 50.0);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].matched_field, MatchedField::Value);
        assert_eq!(matches[0].similarity_category, SimilarityCategory::ExactMatch);
    }

    #[test]
    fn test_unavailable_scorer_returns_empty() {
        let finder = ClosestMatchFinder::with_scorer(Arc::new(UnavailableScorer), SimilarityThresholds::default());
        let matches = finder.find_closest("Sign In", &[Candidate::titled("Sign In")], 10, 0.0);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_empty_candidates() {
        let finder = ClosestMatchFinder::new();
        assert!(finder.find_closest("Sign In", &[], 10, 50.0).is_empty());
    }

    #[test]
    fn test_real_scorer_sign_in() {
        let finder = ClosestMatchFinder::new();
        let candidates = vec![
            Candidate::titled("Login").with_role("button"),
            Candidate::titled("Sign Up").with_role("button"),
        ];

        let matches = finder.find_closest("Sign In", &candidates, 10, 50.0);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].matched_text, "Sign Up");
        assert_eq!(matches[0].similarity_category, SimilarityCategory::MediumSimilarity);
    }
}
