//! Keyword and attempt-history based failure classification

use std::collections::BTreeSet;

use serde_json::Value;
use tracing::debug;

use crate::classifier::patterns::{default_patterns, FailurePatternDef};
use crate::types::{ContextMap, FailureCategory, FailureReason, ObservedError, SearchAttempt, Severity};

/// Default mean search duration above which searches count as slow
pub const DEFAULT_SLOW_SEARCH_MS: f64 = 2000.0;

/// Classifies a failure into structured reasons
#[derive(Debug, Clone)]
pub struct FailurePatternClassifier {
    patterns: Vec<FailurePatternDef>,
    slow_search_threshold_ms: f64,
}

impl FailurePatternClassifier {
    /// Create classifier with the built-in pattern table
    pub fn new() -> Self {
        Self::with_patterns(default_patterns(), DEFAULT_SLOW_SEARCH_MS)
    }

    /// Create classifier with a custom pattern table
    pub fn with_patterns(patterns: Vec<FailurePatternDef>, slow_search_threshold_ms: f64) -> Self {
        Self {
            patterns,
            slow_search_threshold_ms,
        }
    }

    /// Classify an error and the attempts that preceded it
    ///
    /// Reasons come out in detection order: every matching pattern, then
    /// attempt-derived reasons, then a single fallback if nothing else fired.
    pub fn classify(&self, error: &ObservedError, attempts: &[SearchAttempt]) -> Vec<FailureReason> {
        let mut reasons = self.match_patterns(error);
        reasons.extend(self.analyze_attempts(attempts));

        if reasons.is_empty() {
            reasons.push(Self::unclassified(error));
        }

        debug!(count = reasons.len(), "classified failure");
        reasons
    }

    /// Every pattern with a keyword hit contributes one reason
    fn match_patterns(&self, error: &ObservedError) -> Vec<FailureReason> {
        let lowered = error.message.to_lowercase();

        self.patterns
            .iter()
            .filter(|pattern| pattern.matches(&lowered))
            .map(|pattern| {
                debug!(pattern = %pattern.name, "failure pattern matched");

                let mut details = ContextMap::new();
                details.insert("error_type".into(), Value::from(error.type_name.as_str()));
                details.insert("error_message".into(), Value::from(error.message.as_str()));
                details.insert("matched_pattern".into(), Value::from(pattern.name.as_str()));

                FailureReason::new(
                    pattern.category,
                    pattern.name.as_str(),
                    pattern.message.as_str(),
                    pattern.severity,
                )
                .with_details(details)
                .with_recovery(pattern.recovery_suggestion.as_str())
            })
            .collect()
    }

    fn analyze_attempts(&self, attempts: &[SearchAttempt]) -> Vec<FailureReason> {
        let mut reasons = Vec::new();
        if attempts.is_empty() {
            return reasons;
        }

        if attempts.iter().all(|a| !a.success) {
            let strategies: BTreeSet<&str> = attempts
                .iter()
                .map(|a| a.search_strategy.as_str())
                .collect();
            let strategy_list: Vec<&str> = strategies.into_iter().collect();

            let mut details = ContextMap::new();
            details.insert("attempt_count".into(), Value::from(attempts.len()));
            details.insert("strategies_tried".into(), Value::from(strategy_list.clone()));

            reasons.push(
                FailureReason::new(
                    FailureCategory::ElementDetection,
                    "no_successful_searches",
                    format!(
                        "All {} search attempts failed (strategies: {})",
                        attempts.len(),
                        strategy_list.join(", ")
                    ),
                    Severity::High,
                )
                .with_details(details)
                .with_recovery("Try a different search strategy or a shorter, more general target text"),
            );
        }

        let total: f64 = attempts.iter().map(|a| a.duration_ms).sum();
        let mean = total / attempts.len() as f64;
        if mean > self.slow_search_threshold_ms {
            let max = attempts.iter().map(|a| a.duration_ms).fold(0.0_f64, f64::max);

            let mut details = ContextMap::new();
            details.insert("average_duration_ms".into(), Value::from(mean));
            details.insert("max_duration_ms".into(), Value::from(max));
            details.insert("threshold_ms".into(), Value::from(self.slow_search_threshold_ms));

            reasons.push(
                FailureReason::new(
                    FailureCategory::Performance,
                    "slow_search_performance",
                    format!("Searches were slow: average {:.0}ms, max {:.0}ms", mean, max),
                    Severity::Medium,
                )
                .with_details(details)
                .with_recovery("Limit the search to the focused window to cut search time"),
            );
        }

        reasons
    }

    fn unclassified(error: &ObservedError) -> FailureReason {
        let mut details = ContextMap::new();
        details.insert("error_type".into(), Value::from(error.type_name.as_str()));
        details.insert("error_message".into(), Value::from(error.message.as_str()));
        if let Some(trace) = &error.stack_trace {
            details.insert("stack_trace".into(), Value::from(trace.as_str()));
        }

        FailureReason::new(
            FailureCategory::Unknown,
            "unclassified_error",
            format!("Unclassified failure: {}: {}", error.type_name, error.message),
            Severity::Medium,
        )
        .with_details(details)
    }
}

impl Default for FailurePatternClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(message: &str) -> ObservedError {
        ObservedError::new("Exception", message)
    }

    fn attempt(success: bool, duration_ms: f64, strategy: &str) -> SearchAttempt {
        SearchAttempt::new("Sign In", "TestApp")
            .with_outcome(success, if success { 1 } else { 0 }, 0.0)
            .with_duration_ms(duration_ms)
            .with_strategy(strategy)
    }

    #[test]
    fn test_permission_pattern() {
        let classifier = FailurePatternClassifier::new();
        let reasons = classifier.classify(&error("Accessibility permission denied for application"), &[]);

        assert_eq!(reasons.len(), 1);
        assert_eq!(reasons[0].category, FailureCategory::Permission);
        assert_eq!(reasons[0].severity, Severity::Critical);
        assert_eq!(reasons[0].code, "permission_denied");

        let details = reasons[0].technical_details.as_ref().unwrap();
        assert_eq!(details["matched_pattern"], "permission_denied");
        assert_eq!(details["error_type"], "Exception");
    }

    #[test]
    fn test_multiple_patterns_all_surface() {
        let classifier = FailurePatternClassifier::new();
        let reasons = classifier.classify(&error("Request timed out: element not found"), &[]);

        let categories: Vec<_> = reasons.iter().map(|r| r.category).collect();
        assert_eq!(
            categories,
            vec![FailureCategory::ElementDetection, FailureCategory::Performance]
        );
    }

    #[test]
    fn test_unrelated_error_falls_back() {
        let classifier = FailurePatternClassifier::new();
        let err = error("some totally unrelated gibberish zzy").with_stack_trace("frame 0");
        let reasons = classifier.classify(&err, &[]);

        assert_eq!(reasons.len(), 1);
        assert_eq!(reasons[0].category, FailureCategory::Unknown);
        assert_eq!(reasons[0].code, "unclassified_error");
        assert!(reasons[0].recovery_suggestion.is_none());
        assert_eq!(reasons[0].technical_details.as_ref().unwrap()["stack_trace"], "frame 0");
    }

    #[test]
    fn test_empty_message_with_failed_attempts() {
        let classifier = FailurePatternClassifier::new();
        let attempts = vec![attempt(false, 100.0, "fuzzy"), attempt(false, 120.0, "exact")];
        let reasons = classifier.classify(&error(""), &attempts);

        assert_eq!(reasons.len(), 1);
        assert_eq!(reasons[0].code, "no_successful_searches");
        assert!(reasons[0].message.contains("exact, fuzzy"));
    }

    #[test]
    fn test_any_success_suppresses_no_success_reason() {
        let classifier = FailurePatternClassifier::new();
        let attempts = vec![attempt(false, 100.0, "fuzzy"), attempt(true, 100.0, "exact")];
        let reasons = classifier.classify(&error("zzz"), &attempts);

        assert_eq!(reasons.len(), 1);
        assert_eq!(reasons[0].category, FailureCategory::Unknown);
    }

    #[test]
    fn test_slow_search_reason() {
        let classifier = FailurePatternClassifier::new();
        let attempts = vec![attempt(true, 1500.0, "fuzzy"), attempt(true, 3500.0, "fuzzy")];
        let reasons = classifier.classify(&error("zzz"), &attempts);

        assert_eq!(reasons.len(), 1);
        assert_eq!(reasons[0].code, "slow_search_performance");
        assert!(reasons[0].message.contains("2500ms"));
        assert!(reasons[0].message.contains("3500ms"));
    }

    #[test]
    fn test_mean_at_threshold_is_not_slow() {
        let classifier = FailurePatternClassifier::new();
        let attempts = vec![attempt(true, 2000.0, "fuzzy")];
        let reasons = classifier.classify(&error("zzz"), &attempts);

        assert_eq!(reasons[0].category, FailureCategory::Unknown);
    }

    #[test]
    fn test_pattern_order_then_attempts() {
        let classifier = FailurePatternClassifier::new();
        let attempts = vec![attempt(false, 5000.0, "fuzzy")];
        let reasons = classifier.classify(&error("framework unavailable"), &attempts);

        let codes: Vec<_> = reasons.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(
            codes,
            vec!["api_error", "no_successful_searches", "slow_search_performance"]
        );
    }
}
