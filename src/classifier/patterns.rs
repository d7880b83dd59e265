//! Known failure signatures

use serde::{Deserialize, Serialize};

use crate::errors::{AnalyzerError, Result};
use crate::types::{FailureCategory, Severity};

/// One entry in the failure pattern table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailurePatternDef {
    /// Pattern name, used as the reason code
    pub name: String,

    /// Keywords; any case-insensitive substring hit triggers the pattern
    pub keywords: Vec<String>,

    pub category: FailureCategory,

    pub severity: Severity,

    /// Reason message
    pub message: String,

    pub recovery_suggestion: String,
}

impl FailurePatternDef {
    /// Create a pattern definition
    pub fn new(
        name: &str,
        keywords: &[&str],
        category: FailureCategory,
        severity: Severity,
        message: &str,
        recovery_suggestion: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            category,
            severity,
            message: message.to_string(),
            recovery_suggestion: recovery_suggestion.to_string(),
        }
    }

    /// Check whether any keyword occurs in already-lowercased text
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| !k.is_empty() && lowered.contains(&k.to_lowercase()))
    }

    /// Reject nameless or keyword-less entries
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AnalyzerError::InvalidPattern {
                name: self.name.clone(),
                reason: "name must not be empty".to_string(),
            });
        }
        if self.keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(AnalyzerError::InvalidPattern {
                name: self.name.clone(),
                reason: "at least one non-empty keyword is required".to_string(),
            });
        }
        Ok(())
    }
}

/// Built-in pattern table
pub fn default_patterns() -> Vec<FailurePatternDef> {
    vec![
        FailurePatternDef::new(
            "permission_denied",
            &["permission", "denied", "accessibility", "authorized"],
            FailureCategory::Permission,
            Severity::Critical,
            "Accessibility permission is missing or was denied",
            "Grant accessibility permission in System Settings > Privacy & Security > Accessibility",
        ),
        FailurePatternDef::new(
            "element_not_found",
            &["not found", "no element", "no match", "empty result"],
            FailureCategory::ElementDetection,
            Severity::High,
            "Target element could not be located",
            "Verify the element is visible on screen and try a broader search term",
        ),
        FailurePatternDef::new(
            "timeout",
            &["timeout", "timed out", "exceeded", "slow"],
            FailureCategory::Performance,
            Severity::Medium,
            "Operation timed out or ran too slowly",
            "Narrow the search scope or allow a longer timeout",
        ),
        FailurePatternDef::new(
            "api_error",
            &["api error", "framework", "unavailable", "import"],
            FailureCategory::System,
            Severity::Critical,
            "Automation framework or system API is unavailable",
            "Check that the automation framework is installed and the system API is reachable",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_valid() {
        let patterns = default_patterns();
        assert_eq!(patterns.len(), 4);
        for pattern in &patterns {
            assert!(pattern.validate().is_ok());
        }
    }

    #[test]
    fn test_keywords_are_lowercased() {
        let pattern = FailurePatternDef::new(
            "custom",
            &["AXError"],
            FailureCategory::System,
            Severity::High,
            "msg",
            "fix",
        );
        assert!(pattern.matches("axerror -25204"));
    }

    #[test]
    fn test_empty_keywords_rejected() {
        let mut pattern = default_patterns().remove(0);
        pattern.keywords = vec!["  ".to_string()];
        assert!(pattern.validate().is_err());
    }
}
