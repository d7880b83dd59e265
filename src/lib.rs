//! failsight - Failure analysis for UI automation
//!
//! Given a failed UI-automation or content-extraction attempt, classifies the
//! failure, finds the closest available targets by fuzzy matching and emits
//! actionable recommendations.
//!
//! # Architecture
//!
//! - **similarity**: four fuzzy metrics behind a swappable scorer
//! - **classifier**: keyword pattern table + attempt history inspection
//! - **matching**: closest-match ranking and word-overlap analysis
//! - **recommendation** / **confidence**: report synthesis
//! - **analyzer**: facade with a bounded, thread-safe report history

pub mod errors;
pub mod types;
pub mod config;

// Analysis pipeline
pub mod similarity;
pub mod classifier;
pub mod matching;
pub mod recommendation;
pub mod confidence;
pub mod report;
pub mod analyzer;

// Structured log sink
pub mod sink;

// Re-export commonly used types
pub use analyzer::{FailureAnalyzer, FailurePatternSummary};
pub use config::AnalyzerConfig;
pub use errors::{AnalyzerError, Result};
pub use report::FailureAnalysisReport;
pub use types::{Candidate, ContextMap, FailureCategory, FailureReason, ObservedError, SearchAttempt, Severity};
