//! Failure pattern classification
//! Matches error text against known signatures and inspects search attempts

pub mod pattern_classifier;
pub mod patterns;

pub use pattern_classifier::FailurePatternClassifier;
pub use patterns::{default_patterns, FailurePatternDef};
