//! Candidate matching against a failed search target
//! Provides closest-match ranking and word-overlap analysis

pub mod closest;
pub mod overlap;
pub mod types;

pub use closest::{ClosestMatchFinder, DEFAULT_MATCH_LIMIT, DEFAULT_MIN_SCORE};
pub use overlap::SimilarityAnalyzer;
pub use types::{
    MatchedField, RankedMatch, SimilarityAnalysis, SimilarityBreakdown, SimilarityDistribution,
    SuggestedAlternative,
};
