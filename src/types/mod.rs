//! Type definitions module
//!
//! Core types shared by the classifier, matchers and report.

pub mod attempt;
pub mod candidate;
pub mod failure;

/// Open string-keyed map used for passthrough context and details
pub type ContextMap = serde_json::Map<String, serde_json::Value>;

// Re-export commonly used types
pub use attempt::SearchAttempt;
pub use candidate::Candidate;
pub use failure::{FailureCategory, FailureReason, ObservedError, Severity};
