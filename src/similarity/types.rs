//! Similarity type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{AnalyzerError, Result};

/// The four similarity metrics for one target/candidate pair
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SimilarityScores {
    pub ratio: f64,
    pub partial_ratio: f64,
    pub token_sort_ratio: f64,
    pub token_set_ratio: f64,
}

impl SimilarityScores {
    /// Highest of the four metrics
    pub fn best(&self) -> f64 {
        self.ratio
            .max(self.partial_ratio)
            .max(self.token_sort_ratio)
            .max(self.token_set_ratio)
    }
}

/// Similarity category label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityCategory {
    ExactMatch,
    HighSimilarity,
    MediumSimilarity,
    LowSimilarity,
    NoSimilarity,
}

impl SimilarityCategory {
    /// Bucket a score; every cut point is inclusive
    pub fn from_score(score: f64, thresholds: &SimilarityThresholds) -> Self {
        if score >= thresholds.exact {
            SimilarityCategory::ExactMatch
        } else if score >= thresholds.high {
            SimilarityCategory::HighSimilarity
        } else if score >= thresholds.medium {
            SimilarityCategory::MediumSimilarity
        } else if score >= thresholds.low {
            SimilarityCategory::LowSimilarity
        } else {
            SimilarityCategory::NoSimilarity
        }
    }

    /// Get category name
    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityCategory::ExactMatch => "exact_match",
            SimilarityCategory::HighSimilarity => "high_similarity",
            SimilarityCategory::MediumSimilarity => "medium_similarity",
            SimilarityCategory::LowSimilarity => "low_similarity",
            SimilarityCategory::NoSimilarity => "no_similarity",
        }
    }
}

impl fmt::Display for SimilarityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cut points mapping a 0-100 score onto a `SimilarityCategory`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityThresholds {
    pub exact: f64,
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl Default for SimilarityThresholds {
    fn default() -> Self {
        Self {
            exact: 100.0,
            high: 85.0,
            medium: 70.0,
            low: 50.0,
        }
    }
}

impl SimilarityThresholds {
    /// Categorize a score
    pub fn categorize(&self, score: f64) -> SimilarityCategory {
        SimilarityCategory::from_score(score, self)
    }

    /// Check cut points are within 0-100 and strictly descending
    pub fn validate(&self) -> Result<()> {
        let cuts = [self.exact, self.high, self.medium, self.low];

        if cuts.iter().any(|c| !(0.0..=100.0).contains(c)) {
            return Err(AnalyzerError::InvalidThresholds {
                reason: format!("thresholds must lie in 0-100, got {:?}", cuts),
            });
        }

        if !cuts.windows(2).all(|w| w[0] > w[1]) {
            return Err(AnalyzerError::InvalidThresholds {
                reason: format!("thresholds must be strictly descending, got {:?}", cuts),
            });
        }

        Ok(())
    }
}
