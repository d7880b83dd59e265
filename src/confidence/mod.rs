//! Heuristic confidence assessment of a failure analysis
//!
//! Scores how sure the engine is about its own classification, how useful its
//! recommendations are likely to be, and how likely recovery is.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::matching::RankedMatch;
use crate::similarity::SimilarityThresholds;
use crate::types::{FailureReason, SearchAttempt};

pub const FACTOR_CRITICAL: &str = "Critical failure pattern identified";
pub const FACTOR_HIGH_SIMILARITY: &str = "High-similarity alternative found";
pub const FACTOR_MEDIUM_SIMILARITY: &str = "Medium-similarity alternative found";
pub const FACTOR_NO_ELEMENTS: &str = "No elements found in any search attempt";
pub const FACTOR_SOME_ELEMENTS: &str = "Some elements found, targeting issue likely";

/// Confidence bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Confidence buckets plus the factors that decided them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceAssessment {
    pub failure_identification_confidence: ConfidenceLevel,
    pub recommendation_confidence: ConfidenceLevel,
    pub recovery_likelihood: ConfidenceLevel,
    pub overall_confidence: ConfidenceLevel,
    pub factors: Vec<String>,
}

/// Assesses confidence from reasons, matches and attempts
#[derive(Debug, Clone, Default)]
pub struct ConfidenceAssessor {
    thresholds: SimilarityThresholds,
}

impl ConfidenceAssessor {
    pub fn new(thresholds: SimilarityThresholds) -> Self {
        Self { thresholds }
    }

    /// Assess an analysis
    pub fn assess(
        &self,
        reasons: &[FailureReason],
        matches: &[RankedMatch],
        attempts: &[SearchAttempt],
    ) -> ConfidenceAssessment {
        let mut factors: Vec<String> = Vec::new();

        // Identification stays high even without a critical reason; that
        // baseline is kept as observed and is pending product review.
        let failure_identification_confidence = ConfidenceLevel::High;
        if reasons.iter().any(FailureReason::is_critical) {
            factors.push(FACTOR_CRITICAL.to_string());
        }

        let mut recommendation_confidence = ConfidenceLevel::Medium;
        let mut recovery_likelihood = ConfidenceLevel::Medium;

        let best_score = matches
            .iter()
            .map(|m| m.similarity_score)
            .fold(None, |acc: Option<f64>, s| Some(acc.map_or(s, |a| a.max(s))));

        if let Some(best) = best_score {
            if best >= self.thresholds.high {
                recommendation_confidence = ConfidenceLevel::High;
                recovery_likelihood = ConfidenceLevel::High;
                factors.push(FACTOR_HIGH_SIMILARITY.to_string());
            } else if best >= self.thresholds.medium {
                recommendation_confidence = ConfidenceLevel::Medium;
                recovery_likelihood = ConfidenceLevel::Medium;
                factors.push(FACTOR_MEDIUM_SIMILARITY.to_string());
            }
        }

        if !attempts.is_empty() {
            if attempts.iter().all(|a| a.elements_found == 0) {
                factors.push(FACTOR_NO_ELEMENTS.to_string());
                recovery_likelihood = ConfidenceLevel::Low;
            } else {
                factors.push(FACTOR_SOME_ELEMENTS.to_string());
                recovery_likelihood = ConfidenceLevel::High;
            }
        }

        let strong = factors
            .iter()
            .filter(|f| {
                let lowered = f.to_lowercase();
                lowered.contains("high") || lowered.contains("critical")
            })
            .count();

        let overall_confidence = match strong {
            0 => ConfidenceLevel::Low,
            1 => ConfidenceLevel::Medium,
            _ => ConfidenceLevel::High,
        };

        ConfidenceAssessment {
            failure_identification_confidence,
            recommendation_confidence,
            recovery_likelihood,
            overall_confidence,
            factors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::MatchedField;
    use crate::similarity::SimilarityScores;
    use crate::types::{Candidate, FailureCategory, Severity};

    fn ranked(score: f64) -> RankedMatch {
        RankedMatch {
            candidate: Candidate::titled("x"),
            matched_text: "x".to_string(),
            matched_field: MatchedField::Title,
            similarity_score: score,
            scores: SimilarityScores::default(),
            similarity_category: SimilarityThresholds::default().categorize(score),
        }
    }

    fn attempt(elements_found: usize) -> SearchAttempt {
        SearchAttempt::new("x", "app").with_outcome(false, elements_found, 0.0)
    }

    fn critical() -> FailureReason {
        FailureReason::new(FailureCategory::Permission, "permission_denied", "denied", Severity::Critical)
    }

    #[test]
    fn test_baseline_without_inputs() {
        let assessment = ConfidenceAssessor::default().assess(&[], &[], &[]);
        assert_eq!(assessment.failure_identification_confidence, ConfidenceLevel::High);
        assert_eq!(assessment.recommendation_confidence, ConfidenceLevel::Medium);
        assert_eq!(assessment.recovery_likelihood, ConfidenceLevel::Medium);
        assert_eq!(assessment.overall_confidence, ConfidenceLevel::Low);
        assert!(assessment.factors.is_empty());
    }

    #[test]
    fn test_high_similarity_and_critical_is_high_overall() {
        let assessment = ConfidenceAssessor::default().assess(&[critical()], &[ranked(92.0)], &[]);
        assert_eq!(assessment.recommendation_confidence, ConfidenceLevel::High);
        assert_eq!(assessment.recovery_likelihood, ConfidenceLevel::High);
        assert_eq!(assessment.overall_confidence, ConfidenceLevel::High);
        assert_eq!(assessment.factors, vec![FACTOR_CRITICAL, FACTOR_HIGH_SIMILARITY]);
    }

    #[test]
    fn test_no_elements_lowers_recovery() {
        let assessment = ConfidenceAssessor::default().assess(&[], &[ranked(90.0)], &[attempt(0), attempt(0)]);
        assert_eq!(assessment.recommendation_confidence, ConfidenceLevel::High);
        assert_eq!(assessment.recovery_likelihood, ConfidenceLevel::Low);
        assert_eq!(assessment.overall_confidence, ConfidenceLevel::Medium);
    }

    #[test]
    fn test_some_elements_raises_recovery() {
        let assessment = ConfidenceAssessor::default().assess(&[], &[ranked(75.0)], &[attempt(0), attempt(3)]);
        assert_eq!(assessment.recommendation_confidence, ConfidenceLevel::Medium);
        assert_eq!(assessment.recovery_likelihood, ConfidenceLevel::High);
        assert_eq!(assessment.factors, vec![FACTOR_MEDIUM_SIMILARITY, FACTOR_SOME_ELEMENTS]);
        assert_eq!(assessment.overall_confidence, ConfidenceLevel::Low);
    }

    #[test]
    fn test_low_match_adds_no_factor() {
        let assessment = ConfidenceAssessor::default().assess(&[], &[ranked(55.0)], &[]);
        assert!(assessment.factors.is_empty());
        assert_eq!(assessment.recommendation_confidence, ConfidenceLevel::Medium);
    }

    #[test]
    fn test_serialized_levels_are_lowercase() {
        let assessment = ConfidenceAssessor::default().assess(&[critical()], &[], &[]);
        let value = serde_json::to_value(&assessment).unwrap();
        assert_eq!(value["overall_confidence"], "medium");
        assert_eq!(value["failure_identification_confidence"], "high");
    }
}
