//! Recommendation synthesis from reasons, matches and word overlap

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::{RankedMatch, SimilarityAnalysis};
use crate::recommendation::templates::{recovery_template, GENERIC_CHECKLIST};
use crate::similarity::SimilarityThresholds;
use crate::types::{FailureCategory, FailureReason};

/// Order-preserving list that drops exact duplicates
#[derive(Debug, Default)]
struct UniqueList {
    seen: HashSet<String>,
    items: Vec<String>,
}

impl UniqueList {
    fn push(&mut self, item: impl Into<String>) {
        let item = item.into();
        if self.seen.insert(item.clone()) {
            self.items.push(item);
        }
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn into_vec(self) -> Vec<String> {
        self.items
    }
}

/// Recommendations and recovery steps for one failure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub recommendations: Vec<String>,
    pub recovery_suggestions: Vec<String>,
}

/// Builds de-duplicated recommendations
#[derive(Debug, Clone, Default)]
pub struct RecommendationGenerator {
    thresholds: SimilarityThresholds,
}

impl RecommendationGenerator {
    pub fn new(thresholds: SimilarityThresholds) -> Self {
        Self { thresholds }
    }

    /// Generate recommendations and recovery suggestions
    pub fn generate(
        &self,
        reasons: &[FailureReason],
        matches: &[RankedMatch],
        similarity: &SimilarityAnalysis,
    ) -> RecommendationSet {
        RecommendationSet {
            recommendations: self.recommendations(reasons, matches, similarity),
            recovery_suggestions: Self::recovery_suggestions(reasons),
        }
    }

    fn recommendations(
        &self,
        reasons: &[FailureReason],
        matches: &[RankedMatch],
        similarity: &SimilarityAnalysis,
    ) -> Vec<String> {
        let mut out = UniqueList::default();

        for reason in reasons {
            if let Some(suggestion) = reason.recovery_suggestion.as_deref() {
                if !suggestion.is_empty() {
                    out.push(suggestion);
                }
            }
        }

        if let Some(top) = matches.first() {
            if top.similarity_score >= self.thresholds.high {
                out.push(format!(
                    "Try using '{}' instead (similarity: {:.1}%)",
                    top.matched_text, top.similarity_score
                ));
            } else if top.similarity_score >= self.thresholds.medium {
                out.push(format!(
                    "Consider using '{}' as an alternative (similarity: {:.1}%)",
                    top.matched_text, top.similarity_score
                ));
            }
        }

        let common_words = similarity.common_words();
        if !common_words.is_empty() {
            out.push(format!(
                "Available elements share the words: {}. Try searching for them individually",
                common_words.join(", ")
            ));
            if let Some(alternative) = similarity.suggested_alternatives().first() {
                out.push(format!(
                    "'{}' shares words with the target and may be the intended element",
                    alternative.text
                ));
            }
        }

        if out.is_empty() {
            for item in GENERIC_CHECKLIST {
                out.push(*item);
            }
        }

        out.into_vec()
    }

    fn recovery_suggestions(reasons: &[FailureReason]) -> Vec<String> {
        let mut categories: Vec<FailureCategory> = Vec::new();
        for reason in reasons {
            if !categories.contains(&reason.category) {
                categories.push(reason.category);
            }
        }

        let mut out = UniqueList::default();
        for category in categories {
            for step in recovery_template(category) {
                out.push(*step);
            }
        }
        out.into_vec()
    }
}
