//! Error types for failsight
//!
//! Analysis itself never fails on well-typed input; these errors cover
//! configuration and serialization boundaries only.

use thiserror::Error;

/// Main error type for the failure analysis engine
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Similarity thresholds out of order or range
    #[error("Invalid similarity thresholds: {reason}")]
    InvalidThresholds { reason: String },

    /// Pattern table entry is unusable
    #[error("Invalid failure pattern '{name}': {reason}")]
    InvalidPattern { name: String, reason: String },

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("Analyzer error: {0}")]
    Generic(String),
}

/// Result type alias for analyzer operations
pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// Convert anyhow errors to AnalyzerError
impl From<anyhow::Error> for AnalyzerError {
    fn from(err: anyhow::Error) -> Self {
        AnalyzerError::Generic(format!("{:#}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalyzerError::InvalidPattern {
            name: "timeout".to_string(),
            reason: "no keywords".to_string(),
        };
        assert!(err.to_string().contains("timeout"));
        assert!(err.to_string().contains("no keywords"));
    }

    #[test]
    fn test_anyhow_conversion_keeps_context() {
        let err: AnalyzerError = anyhow::anyhow!("root cause")
            .context("Failed to read config file")
            .into();
        let text = err.to_string();
        assert!(text.contains("Failed to read config file"));
        assert!(text.contains("root cause"));
    }
}
