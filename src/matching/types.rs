//! Matching type definitions

use serde::{Deserialize, Serialize};

use crate::similarity::{SimilarityCategory, SimilarityScores};
use crate::types::Candidate;

/// Which candidate field produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchedField {
    Title,
    Description,
    Value,
}

/// A candidate field that cleared the minimum score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    /// The candidate, echoed whole under its own key
    pub candidate: Candidate,

    /// The text that matched
    pub matched_text: String,

    pub matched_field: MatchedField,

    /// Best of the four metrics
    pub similarity_score: f64,

    pub scores: SimilarityScores,

    pub similarity_category: SimilarityCategory,
}

/// Histogram of candidate texts per similarity category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarityDistribution {
    pub exact_match: usize,
    pub high_similarity: usize,
    pub medium_similarity: usize,
    pub low_similarity: usize,
    pub no_similarity: usize,
}

impl SimilarityDistribution {
    /// Count one text in a category
    pub fn record(&mut self, category: SimilarityCategory) {
        match category {
            SimilarityCategory::ExactMatch => self.exact_match += 1,
            SimilarityCategory::HighSimilarity => self.high_similarity += 1,
            SimilarityCategory::MediumSimilarity => self.medium_similarity += 1,
            SimilarityCategory::LowSimilarity => self.low_similarity += 1,
            SimilarityCategory::NoSimilarity => self.no_similarity += 1,
        }
    }

    /// Total texts counted
    pub fn total(&self) -> usize {
        self.exact_match
            + self.high_similarity
            + self.medium_similarity
            + self.low_similarity
            + self.no_similarity
    }
}

/// A candidate sharing words with the target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedAlternative {
    pub text: String,
    pub role: String,
    pub reason: String,
}

/// Word-overlap breakdown of a target against all candidates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityBreakdown {
    pub target_length: usize,
    pub target_words: Vec<String>,
    pub total_candidates: usize,
    pub similarity_distribution: SimilarityDistribution,
    pub common_words: Vec<String>,
    pub suggested_alternatives: Vec<SuggestedAlternative>,
}

/// Result of word-overlap analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SimilarityAnalysis {
    Available(SimilarityBreakdown),

    /// Scorer was unavailable
    Unavailable { error: String },
}

impl SimilarityAnalysis {
    /// Marker used when fuzzy matching cannot run
    pub fn unavailable() -> Self {
        SimilarityAnalysis::Unavailable {
            error: "Fuzzy matching not available".to_string(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, SimilarityAnalysis::Available(_))
    }

    /// Common words, empty when unavailable
    pub fn common_words(&self) -> &[String] {
        match self {
            SimilarityAnalysis::Available(b) => &b.common_words,
            SimilarityAnalysis::Unavailable { .. } => &[],
        }
    }

    /// Suggested alternatives, empty when unavailable
    pub fn suggested_alternatives(&self) -> &[SuggestedAlternative] {
        match self {
            SimilarityAnalysis::Available(b) => &b.suggested_alternatives,
            SimilarityAnalysis::Unavailable { .. } => &[],
        }
    }
}
