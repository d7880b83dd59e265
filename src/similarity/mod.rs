//! Fuzzy string similarity scoring
//! Provides four comparable 0-100 metrics and a shared category policy

pub mod fuzz;
pub mod scorer;
pub mod types;

pub use scorer::{FuzzyScorer, SimilarityScorer, UnavailableScorer};
pub use types::{SimilarityCategory, SimilarityScores, SimilarityThresholds};
