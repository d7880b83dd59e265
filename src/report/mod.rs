//! Failure analysis report
//!
//! The single output artifact of an analysis. Serializes to a JSON map with
//! ISO-8601 timestamps and renders a human-readable summary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::confidence::ConfidenceAssessment;
use crate::errors::Result;
use crate::matching::{RankedMatch, SimilarityAnalysis};
use crate::types::{Candidate, ContextMap, FailureCategory, FailureReason, SearchAttempt, Severity};

/// Everything known about one failed attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureAnalysisReport {
    pub command: String,
    pub target_text: String,
    pub app_name: String,
    pub timestamp: DateTime<Utc>,
    pub failure_reasons: Vec<FailureReason>,
    pub search_attempts: Vec<SearchAttempt>,
    pub available_elements: Vec<Candidate>,
    pub closest_matches: Vec<RankedMatch>,
    pub similarity_analysis: SimilarityAnalysis,
    pub system_context: ContextMap,
    pub recommendations: Vec<String>,
    pub recovery_suggestions: Vec<String>,
    pub confidence_assessment: ConfidenceAssessment,
}

impl FailureAnalysisReport {
    /// Nested map form
    pub fn to_dict(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Pretty JSON form
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a report back from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Most severe reason, if any
    pub fn highest_severity(&self) -> Option<Severity> {
        self.failure_reasons
            .iter()
            .map(|r| r.severity)
            .max_by_key(|s| s.rank())
    }

    /// Check whether any reason has the given category
    pub fn has_category(&self, category: FailureCategory) -> bool {
        self.failure_reasons.iter().any(|r| r.category == category)
    }

    /// Multi-line human-readable summary
    pub fn get_summary(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "Failure analysis for '{}' (target: '{}', app: {}) at {}",
            self.command,
            self.target_text,
            self.app_name,
            self.timestamp.to_rfc3339()
        ));

        lines.push(String::new());
        lines.push(format!("Failure reasons ({}):", self.failure_reasons.len()));
        for (i, reason) in self.failure_reasons.iter().enumerate() {
            lines.push(format!(
                "  {}. [{}] {}",
                i + 1,
                reason.severity.as_str().to_uppercase(),
                reason.message
            ));
        }

        lines.push(String::new());
        lines.push(format!("Search attempts: {}", self.search_attempts.len()));
        lines.push(format!("Available elements: {}", self.available_elements.len()));
        lines.push(format!("Closest matches: {}", self.closest_matches.len()));

        lines.push(String::new());
        lines.push("Recommendations:".to_string());
        for (i, recommendation) in self.recommendations.iter().enumerate() {
            lines.push(format!("  {}. {}", i + 1, recommendation));
        }

        lines.join("\n")
    }
}
