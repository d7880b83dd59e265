//! Word-overlap similarity analysis

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::warn;

use crate::matching::types::{
    SimilarityAnalysis, SimilarityBreakdown, SimilarityDistribution, SuggestedAlternative,
};
use crate::similarity::{FuzzyScorer, SimilarityScorer, SimilarityThresholds};
use crate::types::Candidate;

const COMMON_WORDS_REASON: &str = "Contains common words with target";

/// Lowercased whitespace words
fn lowered_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(|w| w.to_lowercase())
}

/// Analyzes how a target relates to the whole candidate set
#[derive(Clone)]
pub struct SimilarityAnalyzer {
    scorer: Arc<dyn SimilarityScorer>,
    thresholds: SimilarityThresholds,
}

impl SimilarityAnalyzer {
    /// Create analyzer with the built-in fuzzy scorer
    pub fn new() -> Self {
        Self::with_scorer(Arc::new(FuzzyScorer::new()), SimilarityThresholds::default())
    }

    /// Create analyzer with a custom scorer and thresholds
    pub fn with_scorer(scorer: Arc<dyn SimilarityScorer>, thresholds: SimilarityThresholds) -> Self {
        Self { scorer, thresholds }
    }

    /// Build the distribution, common words and suggested alternatives
    pub fn analyze(&self, target: &str, candidates: &[Candidate]) -> SimilarityAnalysis {
        if !self.scorer.is_available() {
            warn!("similarity scorer unavailable, skipping word-overlap analysis");
            return SimilarityAnalysis::unavailable();
        }

        let mut distribution = SimilarityDistribution::default();
        let mut candidate_words = BTreeSet::new();

        for candidate in candidates {
            for text in [candidate.title_text(), candidate.description_text()]
                .into_iter()
                .flatten()
            {
                let ratio = self.scorer.score(target, text).ratio;
                distribution.record(self.thresholds.categorize(ratio));
                candidate_words.extend(lowered_words(text));
            }
        }

        let target_words: BTreeSet<String> = lowered_words(target).collect();
        let common_words: Vec<String> = target_words
            .intersection(&candidate_words)
            .cloned()
            .collect();

        let suggested_alternatives = if common_words.is_empty() {
            Vec::new()
        } else {
            candidates
                .iter()
                .filter_map(|candidate| {
                    let title = candidate.title_text()?;
                    let lowered = title.to_lowercase();
                    common_words
                        .iter()
                        .any(|w| lowered.contains(w.as_str()))
                        .then(|| SuggestedAlternative {
                            text: title.to_string(),
                            role: candidate.role_or_type(),
                            reason: COMMON_WORDS_REASON.to_string(),
                        })
                })
                .collect()
        };

        SimilarityAnalysis::Available(SimilarityBreakdown {
            target_length: target.chars().count(),
            target_words: target.split_whitespace().map(str::to_string).collect(),
            total_candidates: candidates.len(),
            similarity_distribution: distribution,
            common_words,
            suggested_alternatives,
        })
    }
}

impl Default for SimilarityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
