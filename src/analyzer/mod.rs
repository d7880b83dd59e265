//! Failure analysis facade and bounded report history

pub mod failure_analyzer;
pub mod history;

pub use failure_analyzer::FailureAnalyzer;
pub use history::{FailureHistory, FailurePatternSummary, FailurePatterns};
